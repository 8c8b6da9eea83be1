use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_inventory_item::create_inventory_item;
use super::handlers::create_sale::create_sale;
use super::handlers::finance_summary::finance_summary;
use super::handlers::forgot_password::forgot_password;
use super::handlers::google_login::google_login;
use super::handlers::list_inventory::list_inventory;
use super::handlers::list_sales::list_sales;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::reset_password::reset_password;
use super::middleware::authenticate as auth_middleware;
use crate::domain::inventory::ports::InventoryServicePort;
use crate::domain::sales::ports::SalesServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub inventory_service: Arc<dyn InventoryServicePort>,
    pub sales_service: Arc<dyn SalesServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    inventory_service: Arc<dyn InventoryServicePort>,
    sales_service: Arc<dyn SalesServicePort>,
    allowed_origin: HeaderValue,
) -> Router {
    let state = AppState {
        user_service,
        inventory_service,
        sales_service,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/google", post(google_login))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password", post(reset_password));

    let protected_routes = Router::new()
        .route("/api/inventory", get(list_inventory))
        .route("/api/inventory", post(create_inventory_item))
        .route("/api/sales", get(list_sales))
        .route("/api/sales", post(create_sale))
        .route("/api/finance/summary", get(finance_summary))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Only the configured frontend may call the API from a browser; the
    // reset URLs in outgoing mail point at the same origin.
    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state)
}
