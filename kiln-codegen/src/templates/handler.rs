/// HTTP endpoint functions for one module, axum-flavoured.
pub(crate) const BODY: &str = r#"//! HTTP endpoints for the {{label}} module.
//!
//! Scaffolded by kiln for `{{module_path}}`. Edit freely; kiln never
//! regenerates an existing file.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::models::{{snake}}::{{pascal}};
use crate::services::{{snake}}_service::{{pascal}}Service;
use crate::state::AppState;

fn service(state: &AppState) -> {{pascal}}Service {
    {{pascal}}Service::new(state.store.clone())
}

/// List {{plural}}.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<{{pascal}}>>, StatusCode> {
    service(&state)
        .list()
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Create a {{name}}.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<{{pascal}}>,
) -> Result<Json<{{pascal}}>, StatusCode> {
    service(&state)
        .create(input)
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Fetch one {{name}} by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<{{pascal}}>, StatusCode> {
    service(&state)
        .get(id)
        .await
        .map(Json)
        .map_err(|_| StatusCode::NOT_FOUND)
}

/// Update one {{name}} by id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<{{pascal}}>,
) -> Result<Json<{{pascal}}>, StatusCode> {
    service(&state)
        .update(id, input)
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Delete one {{name}} by id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    service(&state)
        .remove(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
"#;
