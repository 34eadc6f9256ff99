//! token-build - normalize design tokens for platform code generators

use anyhow::Context;
use clap::Parser;
use token_build::cli::Cli;
use token_build::{init_logging, run_build};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let config = cli
        .resolve_config()
        .await
        .context("Failed to resolve build configuration")?;
    tracing::debug!("Effective configuration: {:?}", config);

    let report = run_build(&config)
        .await
        .with_context(|| format!("Token build failed for {}", config.input.display()))?;

    println!("{}", report.summary());
    Ok(())
}
