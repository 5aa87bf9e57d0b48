//! Item — the single record kept by the catalogue.

use crate::error::{ItemHubError, ValidationError};
use crate::id::ItemId;

/// A persisted catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Item {
    /// Check that this item may replace the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdMismatch`] when `self.id` differs from `id`.
    pub fn ensure_id(&self, id: ItemId) -> Result<(), ItemHubError> {
        if self.id != id {
            return Err(ValidationError::IdMismatch {
                path: id,
                body: self.id,
            }
            .into());
        }
        Ok(())
    }
}

/// An item that has not been stored yet, so it has no identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl NewItem {
    /// Create a builder for constructing a [`NewItem`].
    #[must_use]
    pub fn builder() -> NewItemBuilder {
        NewItemBuilder::default()
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

/// Step-by-step builder for [`NewItem`]. Missing fields fall back to empty
/// text and a zero price.
#[derive(Debug, Default)]
pub struct NewItemBuilder {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
}

impl NewItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn build(self) -> NewItem {
        NewItem {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        }
    }
}
