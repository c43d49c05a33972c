use crate::domain::entity::Entity;
use crate::domain::ports::ItemStore;
use crate::utils::error::Result;
use std::marker::PhantomData;
use std::sync::Arc;

/// Store adapter for one entity type: fetch by key, insert whole records.
///
/// Performs no validation of its own; callers check identifiers first.
pub struct Repository<E: Entity, S: ItemStore> {
    store: Arc<S>,
    table: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, S: ItemStore> Repository<E, S> {
    pub fn new(store: Arc<S>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
            _entity: PhantomData,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// `Ok(None)` when the table has no record for `key`.
    pub async fn fetch(&self, key: &str) -> Result<Option<E>> {
        tracing::debug!("Fetching {} from {}", key, self.table);
        let item = self
            .store
            .get_item(&self.table, E::KEY_ATTRIBUTE, key)
            .await?;

        item.map(|item| E::from_item(&self.table, item)).transpose()
    }

    /// A failed insert may or may not have been applied.
    pub async fn insert(&self, record: &E) -> Result<()> {
        tracing::debug!("Inserting {} into {}", record.key(), self.table);
        self.store
            .put_item(&self.table, E::KEY_ATTRIBUTE, record.to_item())
            .await
    }
}

impl<E: Entity, S: ItemStore> Clone for Repository<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            table: self.table.clone(),
            _entity: PhantomData,
        }
    }
}
