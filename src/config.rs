//! Server settings, read from command-line flags with environment fallbacks.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "In-memory book catalog served over HTTP")]
pub struct Config {
    /// Host to bind to
    #[arg(long, env = "CATALOG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CATALOG_PORT", default_value = "8080")]
    pub port: u16,

    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    pub empty: bool,

    /// Default log directive, combined with RUST_LOG
    #[arg(long, env = "CATALOG_LOG", default_value = "book_catalog=info")]
    pub log: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
