use serde_derive::Deserialize;

// When changing anything here, make sure to add
// #[serde(alias = "ihavenounderscores")]
// where needed, so it can be read from the ENV vars.

#[derive(Debug, Deserialize)]
pub struct Service {
    #[serde(alias = "baseurl")]
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub service: Service,
}
