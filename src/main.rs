//! book-catalog server binary.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use book_catalog::{http, Config, InMemoryBookRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(config.log.parse()?),
        )
        .init();

    let repo = if config.empty {
        InMemoryBookRepository::new()
    } else {
        InMemoryBookRepository::with_sample_books()
    };
    info!(addr = %config.addr(), empty = config.empty, "starting book catalog");

    http::serve(Arc::new(repo), &config.addr()).await?;
    Ok(())
}
