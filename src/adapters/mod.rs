// Adapters layer: concrete backends behind the `ItemStore` port.

#[cfg(feature = "lambda")]
pub mod dynamo;
pub mod memory;

#[cfg(feature = "lambda")]
pub use dynamo::DynamoStore;
pub use memory::MemoryStore;
