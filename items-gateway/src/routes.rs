//! Axum route handlers for the items API.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use items_core::{timestamp, Item, ItemId, ItemStore, Payload};
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, info_span};

use crate::{
    error::GatewayError,
    request_id::{UuidRequestId, REQUEST_ID_HEADER},
};

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<ItemStore>;

type JsonPayload = Result<Json<Payload>, JsonRejection>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given item store.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(store)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            info_span!("request", method = %req.method(), uri = %req.uri(), request_id)
        }))
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(CorsLayer::permissive())
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Check a create payload: `name` must be present and be a string.
///
/// Update payloads are deliberately not checked; any object is accepted.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `name` is missing or not a string.
pub fn validate_create(payload: &Payload) -> Result<(), GatewayError> {
    match payload.get("name") {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(GatewayError::InvalidRequest("field 'name' must be a string".to_owned())),
        None => Err(GatewayError::InvalidRequest("missing required field 'name'".to_owned())),
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, GatewayError> {
    ItemId::parse_lenient(raw).ok_or_else(|| {
        debug!(raw, "unparsable item id");
        GatewayError::ItemNotFound
    })
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    let now = timestamp::format(&timestamp::now());
    (StatusCode::OK, Json(json!({"status": "ok", "timestamp": now})))
}

/// `GET /items`: list every item.
pub async fn list_items(State(store): State<Store>) -> Json<Vec<Item>> {
    Json(store.find_all())
}

/// `GET /items/:id`: fetch one item.
///
/// # Errors
/// Returns [`GatewayError::ItemNotFound`] if the ID is unknown or unparsable.
pub async fn get_item(
    State(store): State<Store>,
    Path(raw): Path<String>,
) -> Result<Json<Item>, GatewayError> {
    store.find_by_raw_id(&raw).map(Json).ok_or(GatewayError::ItemNotFound)
}

/// `POST /items`: create an item and return it with status 201.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a JSON object
/// with a string `name`.
pub async fn create_item(
    State(store): State<Store>,
    body: JsonPayload,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(payload) = body?;
    validate_create(&payload)?;
    let item = store.create(payload);
    info!(id = %item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /items/:id`: merge the body into an existing item.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a JSON object,
/// or [`GatewayError::ItemNotFound`] if the ID is unknown or unparsable.
pub async fn update_item(
    State(store): State<Store>,
    Path(raw): Path<String>,
    body: JsonPayload,
) -> Result<Json<Item>, GatewayError> {
    let Json(payload) = body?;
    let id = parse_item_id(&raw)?;
    let item = store.update(id, payload).ok_or(GatewayError::ItemNotFound)?;
    info!(%id, "item updated");
    Ok(Json(item))
}

/// `DELETE /items/:id`: remove an item; 204 with an empty body.
///
/// # Errors
/// Returns [`GatewayError::ItemNotFound`] if the ID is unknown or unparsable.
pub async fn delete_item(
    State(store): State<Store>,
    Path(raw): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = parse_item_id(&raw)?;
    if !store.delete(id) {
        return Err(GatewayError::ItemNotFound);
    }
    info!(%id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
