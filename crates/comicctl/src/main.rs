//! ComicVault CLI - loads comic payloads into the character cache

mod loader;
mod report;

use anyhow::{bail, Result};
use clap::Parser;
use comiccache::ComicCache;
use std::sync::Arc;
use tracing::info;

use crate::loader::PayloadSpec;
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Payload files to load, as CHARACTER=PATH
    #[arg(value_name = "CHARACTER=PATH", required = true)]
    payloads: Vec<PayloadSpec>,

    /// Print the cached comics of a character (repeatable)
    #[arg(short, long, value_name = "CHARACTER")]
    show: Vec<String>,

    /// Maximum number of payloads processed at once
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting comicctl v{}", env!("CARGO_PKG_VERSION"));
    info!("Payloads: {}", args.payloads.len());
    info!("Workers: {}", args.workers);

    let cache = Arc::new(ComicCache::with_capacity(args.payloads.len(), 0));
    let summary = loader::load_all(Arc::clone(&cache), args.payloads, args.workers).await;

    let report = Report::build(&cache, &summary, &args.show);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if summary.failed > 0 {
        bail!(
            "{} of {} payloads failed",
            summary.failed,
            summary.failed + summary.loaded
        );
    }

    Ok(())
}
