//! Credential file checker - Entry Point
//!
//! Loads the configured credentials file and prints the accepted user names.

use std::process;

use log::info;

use cm_credentials::config::LoaderConfig;
use cm_credentials::error::LoaderError;
use cm_credentials::error::handlers::{error_to_exit_code, handle_error};
use cm_credentials::loader::{LoadReport, load_credentials};
use cm_credentials::utils::logging::setup_logging;

async fn run() -> Result<LoadReport, LoaderError> {
    let config = LoaderConfig::load()?;

    info!("Reading credentials from {}", config.credentials_path().display());
    load_credentials(&config).await
}

#[tokio::main]
async fn main() {
    setup_logging();

    match run().await {
        Ok(report) => {
            for credentials in report.sorted() {
                println!("{}", credentials.user_name().unwrap_or_default());
            }
        }
        Err(e) => {
            handle_error(&e);
            process::exit(error_to_exit_code(&e));
        }
    }
}
