//! Gallery HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::configs::{db, ConfigPublicResponse};
use crate::backend::error::BackendError;
use crate::shared::validation::{resolve_limit, validate_search_query};

/// Query string of `/api/public/popular`
#[derive(Debug, Default, Deserialize)]
pub struct PopularQuery {
    pub limit: Option<i64>,
}

/// Query string of `/api/public/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// Newest configs across all users
///
/// GET /api/public/popular?limit=20
pub async fn popular_configs(
    State(pool): State<SqlitePool>,
    Query(params): Query<PopularQuery>,
) -> Result<Json<Vec<ConfigPublicResponse>>, BackendError> {
    let limit = resolve_limit(params.limit)?;
    let configs = db::list_recent_configs(&pool, limit).await?;
    Ok(Json(configs.into_iter().map(ConfigPublicResponse::from).collect()))
}

/// Configs whose name contains `q`
///
/// GET /api/public/search?q=solar&limit=20
pub async fn search_configs(
    State(pool): State<SqlitePool>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<ConfigPublicResponse>>, BackendError> {
    validate_search_query(&params.q)?;
    let limit = resolve_limit(params.limit)?;

    let configs = db::search_configs(&pool, &params.q, limit).await?;
    Ok(Json(configs.into_iter().map(ConfigPublicResponse::from).collect()))
}

/// Any config, by ID
///
/// GET /api/public/configs/{id}
pub async fn get_public_config(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ConfigPublicResponse>, BackendError> {
    let config = db::get_config(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Config"))?;
    Ok(Json(config.into()))
}
