use crate::domain::entity::Item;
use crate::domain::ports::ItemStore;
use crate::utils::error::{ApiError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

type Table = HashMap<String, Item>;

/// In-process backend for tests and local invocation. Tables are created on first write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, table: &str) -> Result<usize> {
        let tables = self
            .tables
            .read()
            .map_err(|_| ApiError::store("memory store lock poisoned"))?;

        Ok(tables.get(table).map_or(0, HashMap::len))
    }

    pub fn is_empty(&self, table: &str) -> Result<bool> {
        Ok(self.len(table)? == 0)
    }
}

impl ItemStore for MemoryStore {
    async fn get_item(&self, table: &str, _key_attribute: &str, key: &str) -> Result<Option<Item>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| ApiError::store("memory store lock poisoned"))?;

        Ok(tables.get(table).and_then(|items| items.get(key)).cloned())
    }

    async fn put_item(&self, table: &str, key_attribute: &str, item: Item) -> Result<()> {
        let key = item
            .get(key_attribute)
            .cloned()
            .ok_or_else(|| ApiError::store(format!("item for {} has no {}", table, key_attribute)))?;

        let mut tables = self
            .tables
            .write()
            .map_err(|_| ApiError::store("memory store lock poisoned"))?;

        tables.entry(table.to_string()).or_default().insert(key, item);
        Ok(())
    }
}
