use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;
use log::debug;

use receipt_station::config;
use receipt_station::print_service::client::PrintServiceClient;
use receipt_station::receipt::composer;
use receipt_station::workflow::models::StatusKind;
use receipt_station::workflow::session::PrintSession;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    colog::init();

    let cli = Cli::parse();
    let settings = config::loading::load_config();
    let client = PrintServiceClient::new(&settings.service)?;

    match cli.command {
        Some(Commands::Printers) => list_printers(&client).await,
        Some(Commands::Print { printer }) => print_receipt(&client, printer).await,
        Some(Commands::Dump { output }) => dump_receipt(&output),
        None => print_receipt(&client, None).await,
    }
}

async fn list_printers(client: &PrintServiceClient) -> Result<()> {
    let mut session = PrintSession::new();
    session.load_printers(client).await;

    if let Some(status) = session.status() {
        bail!("{}", status.message);
    }

    for printer in session.printers() {
        let marker = if session.selected_printer() == Some(printer.name.as_str()) { "*" } else { " " };
        println!("{} {} [{}] {}", marker, printer.name, printer.status.icon.as_str(), printer.status.message);
    }
    Ok(())
}

async fn print_receipt(client: &PrintServiceClient, printer: Option<String>) -> Result<()> {
    let mut session = PrintSession::new();
    session.load_printers(client).await;

    if let Some(status) = session.status() {
        if status.kind == StatusKind::Error {
            bail!("{}", status.message);
        }
    }

    if let Some(name) = printer {
        session.select_printer(&name);
    }

    match session.selected_printer() {
        Some(name) => debug!("Submitting receipt to printer '{}'.", name),
        None => bail!("No printer available to print on."),
    }

    session.submit_receipt(client).await;

    match session.status() {
        Some(status) if status.kind == StatusKind::Error => bail!("{}", status.message),
        Some(status) => {
            println!("{}", status.message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn dump_receipt(output: &Path) -> Result<()> {
    let document = composer::compose();
    std::fs::write(output, &document)?;
    println!("Wrote receipt document to {} ({} bytes).", output.display(), document.len());
    Ok(())
}
