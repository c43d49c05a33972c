use crate::core::gateway::{GatewayRequest, GatewayResponse};
use crate::domain::entity::Item;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Single-item get/put against a key-value backend with one table per entity.
pub trait ItemStore: Send + Sync {
    /// `Ok(None)` when no item has that key.
    fn get_item(
        &self,
        table: &str,
        key_attribute: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Item>>> + Send;

    fn put_item(
        &self,
        table: &str,
        key_attribute: &str,
        item: Item,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Maps one gateway request to one response. Failures are folded into the response.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, request: GatewayRequest) -> GatewayResponse;
}
