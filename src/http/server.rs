//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the product handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Own the shared registry and hand it to handlers
//! - Bind server to listener with graceful shutdown

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{RegistryConfig, TronicsConfig};
use crate::http::error::ApiError;
use crate::http::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::http::request::{request_span, MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics;
use crate::registry::{MinLengthValidator, Registry};

/// Application state injected into handlers.
///
/// A single lock guards every registry operation.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<Registry>>,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Registry>, ApiError> {
        self.registry.read().map_err(|_| ApiError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>, ApiError> {
        self.registry.write().map_err(|_| ApiError::Poisoned)
    }
}

/// Build the registry described by `config`.
pub fn build_registry(config: &RegistryConfig) -> Registry {
    let validator = Arc::new(MinLengthValidator::new(config.min_name_len));
    Registry::with_validator(config.key_policy, validator).seed(config.seed.iter().cloned())
}

/// HTTP server for the product API.
pub struct HttpServer {
    router: Router,
    config: TronicsConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with a registry built from the configuration.
    pub fn new(config: TronicsConfig) -> Self {
        let registry = build_registry(&config.registry);
        Self::with_registry(config, registry)
    }

    /// Create a new HTTP server around an existing registry.
    pub fn with_registry(config: TronicsConfig, registry: Registry) -> Self {
        tracing::debug!(
            products = registry.len(),
            key_policy = ?registry.policy(),
            "Registry ready"
        );
        metrics::record_registry_size(registry.len());

        let state = AppState::new(registry);
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &TronicsConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .route("/health", get(health))
            .with_state(state);
        apply_layers(routes, config)
    }

    /// Router with all layers, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state, for inspecting the registry.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &TronicsConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wrap `routes` in the middleware stack, outermost last.
///
/// The body limit comes from `security.max_body_size` alone; axum's
/// built-in extractor limit is disabled so it cannot cap it lower.
/// Metrics sit outside the timeout and limit layers so their 408/413
/// responses are counted.
fn apply_layers(routes: Router, config: &TronicsConfig) -> Router {
    routes
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
