use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod store;

use services::{EmpresaService, IncidenteService};
use store::memory::MemoryStore;
use store::{EmpresaStore, IncidenteStore, UsuarioStore};

/// Shared application state: the services and the usuario store, each handed
/// its collaborators explicitly at construction.
#[derive(Clone)]
pub struct AppState {
    pub empresas: EmpresaService,
    pub incidentes: IncidenteService,
    pub usuarios: Arc<dyn UsuarioStore>,
}

impl AppState {
    pub fn new(
        empresas: Arc<dyn EmpresaStore>,
        incidentes: Arc<dyn IncidenteStore>,
        usuarios: Arc<dyn UsuarioStore>,
    ) -> Self {
        Self {
            empresas: EmpresaService::new(empresas.clone(), incidentes.clone()),
            incidentes: IncidenteService::new(empresas, incidentes),
            usuarios,
        }
    }

    /// State backed by the in-memory store preloaded with the fixture data.
    pub fn seeded() -> Self {
        let store = Arc::new(MemoryStore::seeded());
        Self::new(store.clone(), store.clone(), store)
    }
}

pub fn app(state: AppState) -> Router {
    let empresa_routes = Router::new()
        .route("/empresas", get(handlers::empresas::empresas_get))
        .route("/empresas/incidentes", get(handlers::empresas::incidentes_get))
        .route("/empresas/favorita", get(handlers::empresas::favorita_get))
        .route(
            "/empresas/:id",
            post(handlers::empresas::incidente_post).put(handlers::empresas::incidente_put),
        )
        // Layers run in reverse registration order: authentication first, then
        // the incident-query guard, then the handler.
        .layer(axum::middleware::from_fn(
            middleware::validate::validate_empresa_request,
        ))
        .layer(axum::middleware::from_fn(
            middleware::auth::jwt_auth_middleware,
        ));

    Router::new()
        // Public
        .route("/health", get(health))
        .route("/login", post(handlers::login::login_post))
        // Protected empresa/incidente API
        .merge(empresa_routes)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}
