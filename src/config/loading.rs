use config::{Config, Environment};

use super::models::Settings;

pub fn load_config() -> Settings {
    // As Rust has no native support for .env files,
    // we use the dotenv_flow crate to import to actual ENV vars.
    let dotenv_path = dotenv_flow::dotenv_flow();
    if let Ok(path) = dotenv_path {
        println!("Loaded dotenv file: {:?}", path);
    }

    let config = Config::builder()
        .add_source(Environment::default()
            .prefix("RST")
            .separator("_")
            .prefix_separator("_")
            .try_parsing(true))
            .set_default("service.baseurl", "http://localhost:3001/").unwrap()
        .build().unwrap();

    config.try_deserialize().unwrap()
}
