//! HTTP Controller (Driver Adapter)
//!
//! Axum-based JSON API that delegates to application use cases. Handlers
//! follow callable-function semantics: every outcome, including failure, is
//! a 200 response whose body either carries the result or an `error` field.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::ports::MenuStorePort;
use crate::application::use_cases::{AddMenuItemError, AddMenuItemUseCase, ListMenuUseCase};

use super::auth::caller_identity;
use super::request::AddMenuItemRequest;
use super::response::{
    ADD_ITEM_FAILED, AUTH_REQUIRED, AddMenuItemResponse, ErrorResponse, FETCH_MENU_FAILED,
    HealthResponse, ITEM_ADDED, ListMenuResponse, MenuItemResponse,
};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: MenuStorePort,
{
    /// Use case for listing the menu.
    pub list_menu: Arc<ListMenuUseCase<S>>,
    /// Use case for appending a menu item.
    pub add_menu_item: Arc<AddMenuItemUseCase<S>>,
    /// Application version.
    pub version: String,
}

impl<S> Clone for AppState<S>
where
    S: MenuStorePort,
{
    fn clone(&self) -> Self {
        Self {
            list_menu: Arc::clone(&self.list_menu),
            add_menu_item: Arc::clone(&self.add_menu_item),
            version: self.version.clone(),
        }
    }
}

impl<S> AppState<S>
where
    S: MenuStorePort,
{
    /// Wire both use cases onto one store adapter.
    pub fn new(store: Arc<S>, version: impl Into<String>) -> Self {
        Self {
            list_menu: Arc::new(ListMenuUseCase::new(Arc::clone(&store))),
            add_menu_item: Arc::new(AddMenuItemUseCase::new(store)),
            version: version.into(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: MenuStorePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/menu", get(list_menu))
        .route("/api/v1/menu/items", post(add_menu_item))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: MenuStorePort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List operation: every document in the menu collection.
async fn list_menu<S>(State(state): State<AppState<S>>) -> Response
where
    S: MenuStorePort,
{
    match state.list_menu.execute().await {
        Ok(documents) => {
            let menu_items: Vec<MenuItemResponse> = documents
                .into_iter()
                .map(|doc| MenuItemResponse {
                    id: doc.id,
                    fields: doc.fields,
                })
                .collect();

            (StatusCode::OK, Json(ListMenuResponse { menu_items })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error getting menu");
            (StatusCode::OK, Json(ErrorResponse::new(FETCH_MENU_FAILED))).into_response()
        }
    }
}

/// Create operation: append one item for an authenticated caller.
async fn add_menu_item<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Json(request): Json<AddMenuItemRequest>,
) -> Response
where
    S: MenuStorePort,
{
    let caller = caller_identity(&headers);

    match state
        .add_menu_item
        .execute(caller.as_ref(), request.into_new_item())
        .await
    {
        Ok(id) => (
            StatusCode::OK,
            Json(AddMenuItemResponse {
                message: ITEM_ADDED.to_string(),
                id,
            }),
        )
            .into_response(),
        Err(AddMenuItemError::Unauthenticated) => {
            (StatusCode::OK, Json(ErrorResponse::new(AUTH_REQUIRED))).into_response()
        }
        Err(AddMenuItemError::Store(e)) => {
            tracing::error!(error = %e, "Error adding menu item");
            (StatusCode::OK, Json(ErrorResponse::new(ADD_ITEM_FAILED))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::auth::CALLER_UID_HEADER;
    use crate::infrastructure::persistence::InMemoryMenuStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn make_state() -> AppState<InMemoryMenuStore> {
        AppState::new(Arc::new(InMemoryMenuStore::new()), "1.0.0-test")
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn empty_menu_lists_as_empty_array() {
        let app = create_router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"menuItems":[]}"#);
    }

    #[tokio::test]
    async fn add_without_identity_returns_auth_error() {
        let app = create_router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/menu/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Burger", "price": 9.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, AUTH_REQUIRED);
    }

    #[tokio::test]
    async fn add_with_identity_returns_id_and_message() {
        let app = create_router(make_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/menu/items")
                    .header("content-type", "application/json")
                    .header(CALLER_UID_HEADER, "uid-42")
                    .body(Body::from(r#"{"name": "Burger", "price": 9.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let added: AddMenuItemResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(added.message, ITEM_ADDED);
        assert!(!added.id.as_str().is_empty());
    }
}
