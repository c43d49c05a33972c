use crate::config::StoreConfig;
use crate::domain::entity::Item;
use crate::domain::ports::ItemStore;
use crate::utils::error::{ApiError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

/// DynamoDB backend. The SDK client is safe to share across concurrent invocations.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }

    /// Builds a client for the configured region and optional endpoint override.
    pub async fn connect(config: &StoreConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint_url {
            tracing::info!("Using DynamoDB endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(DynamoClient::from_conf(builder.build()))
    }
}

fn to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect()
}

fn from_attributes(table: &str, attributes: HashMap<String, AttributeValue>) -> Item {
    let mut item = Item::with_capacity(attributes.len());
    for (name, value) in attributes {
        match value {
            AttributeValue::S(value) => {
                item.insert(name, value);
            }
            other => {
                tracing::debug!("Skipping non-string attribute {} in {}: {:?}", name, table, other);
            }
        }
    }
    item
}

impl ItemStore for DynamoStore {
    async fn get_item(&self, table: &str, key_attribute: &str, key: &str) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(key_attribute, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| {
                ApiError::store(format!("GetItem on {} failed: {}", table, DisplayErrorContext(&e)))
            })?;

        Ok(output.item.map(|attributes| from_attributes(table, attributes)))
    }

    async fn put_item(&self, table: &str, _key_attribute: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_attributes(item)))
            .send()
            .await
            .map_err(|e| {
                ApiError::store(format!("PutItem on {} failed: {}", table, DisplayErrorContext(&e)))
            })?;

        Ok(())
    }
}
