//! OpenAPI description of the item API.

use axum::Router;
use utoipa::OpenApi;

use itemhub_app::ports::ItemRepository;

use crate::api::items;
use crate::error::ErrorBody;
use crate::state::AppState;

/// Where the OpenAPI document is served.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Where the interactive page is served when the `swagger-ui` feature is on.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI document covering the five item routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        items::list,
        items::get,
        items::create,
        items::replace,
        items::delete,
    ),
    components(schemas(
        items::ItemResponse,
        items::CreateItemRequest,
        items::ReplaceItemRequest,
        ErrorBody,
    )),
    tags((name = "items", description = "Catalogue item CRUD"))
)]
pub struct ApiDoc;

/// Routes exposing the API description.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new().route(OPENAPI_PATH, axum::routing::get(openapi_json))
}

/// Routes exposing the API description and the interactive page.
///
/// The Swagger UI router serves the JSON document itself.
#[cfg(feature = "swagger-ui")]
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
