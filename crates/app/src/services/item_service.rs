//! Item service — use-cases for managing catalogue items.

use itemhub_domain::error::{ItemHubError, NotFoundError};
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, NewItem};

use crate::ports::ItemRepository;

fn not_found(id: ItemId) -> ItemHubError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}

/// Application service for item CRUD operations.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all items in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<Item>, ItemHubError> {
        self.repo.get_all().await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, ItemHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Store a new item. The repository assigns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: NewItem) -> Result<Item, ItemHubError> {
        let created = self.repo.create(item).await?;
        tracing::debug!(id = %created.id, "item created");
        Ok(created)
    }

    /// Replace every field of the item stored under `id`.
    ///
    /// The mismatch check runs before the repository is touched, so a rejected
    /// replacement leaves the stored row unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::Validation`] when `item.id` differs from `id`,
    /// [`ItemHubError::NotFound`] when no item with `id` exists, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, item))]
    pub async fn replace_item(&self, id: ItemId, item: Item) -> Result<Item, ItemHubError> {
        item.ensure_id(id)?;
        self.repo.update(item).await?.ok_or_else(|| not_found(id))
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::NotFound`] when no item with `id` exists
    /// (including one that was already deleted), or a storage error from the
    /// repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), ItemHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
