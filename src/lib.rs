pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod local;
#[cfg(feature = "lambda")]
pub mod runtime;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::StoreConfig;

#[cfg(feature = "lambda")]
pub use adapters::DynamoStore;
pub use adapters::MemoryStore;

pub use crate::core::{GatewayRequest, GatewayResponse, Repository};
pub use domain::model::{Book, Employee, Shift};
pub use utils::error::{ApiError, ErrorKind, Result};
