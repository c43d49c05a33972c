use crate::handlers::HandlerKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-functions")]
#[command(about = "Run an API Gateway proxy event through a roster handler locally")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "employees")]
    pub handler: HandlerKind,

    /// Proxy event JSON file, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub event: String,

    /// JSON file with records to load before the event runs
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// TOML file overriding region and table names
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
