use anyhow::Context;
use clap::Parser;
use roster_functions::local::{LocalRunner, SeedData};
use roster_functions::utils::{logger, validation::Validate};
use roster_functions::{CliConfig, GatewayRequest, MemoryStore, StoreConfig};
use std::io::Read;
use std::sync::Arc;

fn read_event(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read event from stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(source).with_context(|| format!("failed to read event file {}", source))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let store_config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    if let Err(e) = store_config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let runner = LocalRunner::new(Arc::new(MemoryStore::new()), &store_config);
    if let Some(path) = &cli.seed {
        let seed = SeedData::from_file(path)
            .with_context(|| format!("failed to load seed data {}", path.display()))?;
        runner.seed(&seed).await?;
    }

    let event = read_event(&cli.event)?;
    let request: GatewayRequest =
        serde_json::from_str(&event).context("event is not an API Gateway proxy request")?;

    let response = runner.invoke(cli.handler, request).await;
    tracing::info!("{:?} handler answered {}", cli.handler, response.status());

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
