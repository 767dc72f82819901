use crate::config::AppConfig;
use clap::Parser;

/// Command-line overrides for the environment configuration.
#[derive(Parser, Debug, Default)]
#[command(
    name = "email-validator",
    about = "HTTP service scoring email addresses by syntax, MX records and domain category",
    version
)]
pub struct Cli {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
