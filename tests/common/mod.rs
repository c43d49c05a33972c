use roster_functions::core::{Item, ItemStore};
use roster_functions::{ApiError, MemoryStore, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a `MemoryStore`, counting every backend call and optionally failing them all.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
    failing: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, table: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ApiError::store(format!(
                "simulated outage: {} is unavailable",
                table
            )));
        }
        Ok(())
    }
}

impl ItemStore for RecordingStore {
    async fn get_item(&self, table: &str, key_attribute: &str, key: &str) -> Result<Option<Item>> {
        self.record(table)?;
        self.inner.get_item(table, key_attribute, key).await
    }

    async fn put_item(&self, table: &str, key_attribute: &str, item: Item) -> Result<()> {
        self.record(table)?;
        self.inner.put_item(table, key_attribute, item).await
    }
}
