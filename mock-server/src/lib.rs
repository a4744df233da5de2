//! In-memory stand-in for the GLS ADE web API.
//!
//! Serves every pickup and preparing-box operation as
//! `POST /{operation}` with a JSON object of parameters, including the
//! `session` id. Successful calls answer 200 with the decoded value;
//! rejections answer with `{"code", "message"}` and a 4xx status.

pub mod config;
pub mod fault;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};

pub use config::Config;
pub use fault::Fault;
pub use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub session: Arc<str>,
}

impl AppState {
    pub fn new(session: &str) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            session: Arc::from(session),
        }
    }
}

/// Router with an empty store, accepting the default session id.
pub fn app() -> Router {
    app_with(AppState::new(&Config::default().session))
}

pub fn app_with(state: AppState) -> Router {
    Router::new()
        .route("/{operation}", post(call))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), "ADE mock listening");
    axum::serve(listener, app_with(state)).await
}

async fn call(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Json(params): Json<Map<String, Value>>,
) -> Result<Json<Value>, Fault> {
    let session = params.get("session").and_then(Value::as_str);
    if session != Some(&*state.session) {
        warn!(%operation, "rejected call without a valid session");
        return Err(Fault::new(
            StatusCode::UNAUTHORIZED,
            "err_sess_not_found",
            "session not found or expired",
        ));
    }

    debug!(%operation, params = params.len(), "ADE call");
    let result = state.store.write().await.handle(&operation, &params);
    if let Err(fault) = &result {
        warn!(%operation, code = fault.code, "ADE fault");
    }
    result.map(Json)
}
