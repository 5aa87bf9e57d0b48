//! `SQLite` implementation of [`ItemRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use itemhub_app::ports::ItemRepository;
use itemhub_domain::error::ItemHubError;
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, NewItem};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Item`].
struct Wrapper(Item);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Item> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Item {
            id: ItemId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO items (name, price, category) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, price, category FROM items WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, price, category FROM items ORDER BY id";
const UPDATE: &str = "UPDATE items SET name = ?, price = ?, category = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM items WHERE id = ?";

/// `SQLite`-backed item repository.
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for SqliteItemRepository {
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ItemHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&item.name)
                .bind(item.price)
                .bind(&item.category)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item.with_id(ItemId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, ItemHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ItemHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        item: Item,
    ) -> impl Future<Output = Result<Option<Item>, ItemHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&item.name)
                .bind(item.price)
                .bind(&item.category)
                .bind(item.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(item))
        }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, ItemHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
