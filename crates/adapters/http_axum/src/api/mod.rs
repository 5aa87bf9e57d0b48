//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::routing::get;

use itemhub_app::ports::ItemRepository;

use crate::state::AppState;

/// Build the item sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/items", get(items::list::<R>).post(items::create::<R>))
        .route(
            "/items/{id}",
            get(items::get::<R>)
                .put(items::replace::<R>)
                .delete(items::delete::<R>),
        )
}
