mod cli;
mod commands;
mod mcp;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` decides the level unless `-v` is given; with neither, only warnings show.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default());

    match level {
        Some(level) => filter.add_directive(level.into()),
        None => filter,
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Extract {
            path,
            pages,
            output,
        } => {
            let count = commands::extract::run(&path, &pages, &output)?;
            println!("Extracted {} page(s) to {}", count, output.display());
        }
        Commands::Delete {
            path,
            pages,
            output,
        } => {
            let count = commands::delete::run(&path, &pages, &output)?;
            println!("Wrote {} remaining page(s) to {}", count, output.display());
        }
        Commands::Split {
            path,
            output_dir,
            pages,
        } => {
            let written = commands::split::run(&path, &output_dir, &pages)?;
            println!("Split {} page(s) into {}", written.len(), output_dir.display());
        }
        Commands::Resolve {
            pages,
            total,
            exclude,
        } => {
            commands::resolve::run(&pages, total, exclude)?;
        }
    }

    Ok(())
}
