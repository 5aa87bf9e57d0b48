//! JSON REST handlers for items.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use itemhub_app::ports::ItemRepository;
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, NewItem};

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// An item as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = "tools")]
    pub category: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name,
            price: item.price,
            category: item.category,
        }
    }
}

/// Request body for creating an item. Any `id` field is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem::builder()
            .name(req.name)
            .price(req.price)
            .category(req.category)
            .build()
    }
}

/// Request body for replacing an item.
///
/// `id` may be omitted; when present it must equal the id in the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceItemRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl ReplaceItemRequest {
    fn into_item(self, path_id: ItemId) -> Item {
        Item {
            id: self.id.map_or(path_id, ItemId::new),
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ItemResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ItemResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created {
        location: String,
        item: Json<ItemResponse>,
    },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { location, item } => {
                (StatusCode::CREATED, [(header::LOCATION, location)], item).into_response()
            }
        }
    }
}

/// Possible responses from the replace and delete endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    ItemId::from_str(raw).map_err(|_| ApiError::Malformed(format!("invalid item id `{raw}`")))
}

/// `GET /items`
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "Every stored item, by ascending id", body = [ItemResponse]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let items = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(Json(
        items.into_iter().map(ItemResponse::from).collect(),
    )))
}

/// `GET /items/{id}`
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    let item = state.item_service.get_item(item_id).await?;
    Ok(GetResponse::Ok(Json(item.into())))
}

/// `POST /items`
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item stored", body = ItemResponse,
            headers(("location" = String, description = "Path of the new item"))),
        (status = 400, description = "Body is not a valid item", body = ErrorBody),
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.item_service.create_item(req.into()).await?;
    Ok(CreateResponse::Created {
        location: format!("/items/{}", created.id),
        item: Json(created.into()),
    })
}

/// `PUT /items/{id}`
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = ReplaceItemRequest,
    responses(
        (status = 204, description = "Item replaced"),
        (status = 400, description = "Malformed body or body id differs from path id", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn replace<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<ReplaceItemRequest>, JsonRejection>,
) -> Result<NoContentResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    let Json(req) = payload?;
    state
        .item_service
        .replace_item(item_id, req.into_item(item_id))
        .await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /items/{id}`
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    state.item_service.delete_item(item_id).await?;
    Ok(NoContentResponse::NoContent)
}
