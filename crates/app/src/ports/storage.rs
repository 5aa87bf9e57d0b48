//! Storage port — repository trait for item persistence.

use std::future::Future;

use itemhub_domain::error::ItemHubError;
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, NewItem};

/// Repository for persisting and querying [`Item`]s.
///
/// Every method maps onto a single statement against the backing store, so
/// each call is atomic on its own. Absence is reported through the return
/// value, never as an error.
pub trait ItemRepository {
    /// Insert a new item and return it with its store-assigned identifier.
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ItemHubError>> + Send;

    /// Get an item by its unique identifier.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, ItemHubError>> + Send;

    /// Get all items, ordered by ascending identifier.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ItemHubError>> + Send;

    /// Overwrite every field of the row matching `item.id`.
    ///
    /// Resolves to `None` when no such row exists.
    fn update(
        &self,
        item: Item,
    ) -> impl Future<Output = Result<Option<Item>, ItemHubError>> + Send;

    /// Delete an item by its unique identifier.
    ///
    /// Resolves to `false` when no such row exists.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, ItemHubError>> + Send;
}
