//! Config HTTP Handlers
//!
//! CRUD over the authenticated user's configs. All routes sit behind the
//! auth middleware. A config that belongs to another user is answered
//! exactly like one that does not exist.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use super::db;
use super::models::ConfigResponse;
use crate::backend::auth::guard::owned_by;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::ConfigPayload;

/// Map a `(user_id, name)` uniqueness violation to 409
fn name_conflict(err: sqlx::Error) -> BackendError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::warn!("Config name already exists: {}", db_err.message());
            return BackendError::handler(StatusCode::CONFLICT, "Config name already exists");
        }
    }
    BackendError::Database(err)
}

/// Create a config
///
/// POST /api/configs
pub async fn create_config(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Json(payload): Json<ConfigPayload>,
) -> Result<(StatusCode, Json<ConfigResponse>), BackendError> {
    payload.validate()?;

    let config = db::create_config(&pool, user.id, &payload)
        .await
        .map_err(name_conflict)?;

    tracing::info!("Config {} created by user {}", config.id, user.id);
    Ok((StatusCode::CREATED, Json(config.into())))
}

/// List the current user's configs, newest first
///
/// GET /api/configs
pub async fn list_configs(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ConfigResponse>>, BackendError> {
    let configs = db::list_configs_for_user(&pool, user.id).await?;
    Ok(Json(configs.into_iter().map(ConfigResponse::from).collect()))
}

/// Get one of the current user's configs
///
/// GET /api/configs/{id}
pub async fn get_config(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ConfigResponse>, BackendError> {
    let config = owned_by(db::get_config(&pool, id).await?, &user)
        .ok_or_else(|| BackendError::not_found("Config"))?;

    Ok(Json(config.into()))
}

/// Replace one of the current user's configs
///
/// PUT /api/configs/{id}
///
/// The ownership check and the update share a transaction.
pub async fn update_config(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<ConfigPayload>,
) -> Result<Json<ConfigResponse>, BackendError> {
    payload.validate()?;

    let mut tx = pool.begin().await?;

    let existing = owned_by(db::get_config(&mut *tx, id).await?, &user)
        .ok_or_else(|| BackendError::not_found("Config"))?;

    let updated = db::update_config(&mut *tx, existing.id, &payload)
        .await
        .map_err(name_conflict)?
        .ok_or_else(|| BackendError::not_found("Config"))?;

    tx.commit().await?;

    tracing::info!("Config {} updated by user {}", updated.id, user.id);
    Ok(Json(updated.into()))
}

/// Delete one of the current user's configs
///
/// DELETE /api/configs/{id}
pub async fn delete_config(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, BackendError> {
    let mut tx = pool.begin().await?;

    let existing = owned_by(db::get_config(&mut *tx, id).await?, &user)
        .ok_or_else(|| BackendError::not_found("Config"))?;

    if !db::delete_config(&mut *tx, existing.id).await? {
        return Err(BackendError::not_found("Config"));
    }

    tx.commit().await?;

    tracing::info!("Config {} deleted by user {}", existing.id, user.id);
    Ok(Json(json!({ "message": "Config deleted" })))
}
