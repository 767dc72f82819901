use clap::Parser;
use email_validator::cli::Cli;
use email_validator::config::AppConfig;
use email_validator::error::AppError;
use email_validator::{server, telemetry};

/// Email Validator Service Entry Point
///
/// Loads configuration from `.env`/environment, applies command-line
/// overrides, installs logging and starts the Actix-web server
/// (`0.0.0.0:5002` by default).
#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.apply(&mut config);

    telemetry::init(&config.telemetry)?;

    server::run(config).await
}
