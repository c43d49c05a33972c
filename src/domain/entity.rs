use crate::utils::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// A stored record: attribute name to string value.
pub type Item = HashMap<String, String>;

/// A record type kept one-per-item in its own table.
///
/// The JSON wire form comes from serde; the backend form is mapped by hand in
/// [`Entity::to_item`] and [`Entity::from_item`] so attribute names stay under
/// this crate's control.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// Name of the string attribute the table is keyed on.
    const KEY_ATTRIBUTE: &'static str;

    fn key(&self) -> &str;

    fn to_item(&self) -> Item;

    fn from_item(table: &str, item: Item) -> Result<Self>;
}

/// Removes `attribute` from `item`, failing when the stored record lacks it.
pub fn take_attribute(item: &mut Item, table: &str, attribute: &str) -> Result<String> {
    item.remove(attribute)
        .ok_or_else(|| ApiError::MissingAttribute {
            table: table.to_string(),
            attribute: attribute.to_string(),
        })
}
