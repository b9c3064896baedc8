use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use token_holders::config::Config;
use token_holders::utils::helper::{format_address, validate_address};
use token_holders::{
    CompositeReportHandler, ConsoleReportHandler, EtherscanHolderSource, HoldersError,
    JsonReportHandler, ReportHandler, TokenHoldersFetcher,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::parse();
    let handler = build_report_handler(&config);

    let outcome = tokio::runtime::Runtime::new()?.block_on(async {
        let result = run(&config, handler.as_ref()).await;
        if let Err(e) = &result {
            handler.handle_error(e).await;
        }
        result
    });

    if let Err(e) = outcome {
        eprintln!("Execution failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: &Config, handler: &dyn ReportHandler) -> anyhow::Result<()> {
    let api_key = config.api_key.clone().ok_or(HoldersError::MissingApiKey)?;
    let source = EtherscanHolderSource::with_base_url(api_key, &config.base_url, config.timeout())?;

    info!("Initializing token holders fetcher...");
    info!("Explorer: {}", source.base_url());
    let token_address = validate_address(&config.token_address)?;
    info!("Token Address: {}", format_address(&token_address));

    let fetcher = TokenHoldersFetcher::new(Arc::new(source), config.decimals);
    let report = fetcher
        .fetch_report(
            &token_address,
            config.block_range(),
            config.top,
            config.min_balance,
        )
        .await
        .with_context(|| format!("failed to fetch holders of {}", token_address))?;

    handler.handle_report(&report).await?;
    Ok(())
}

fn build_report_handler(config: &Config) -> Arc<CompositeReportHandler> {
    let mut composite = CompositeReportHandler::new();
    composite.add_handler(Arc::new(ConsoleReportHandler::new()));
    if let Some(path) = &config.output {
        composite.add_handler(Arc::new(JsonReportHandler::new(path.clone())));
    }
    Arc::new(composite)
}
