/**
 * API Route Handlers
 *
 * This module defines the routes for API endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info (requires authentication)
 *
 * ## Configs (require authentication)
 * - `POST /api/configs` - Create a config
 * - `GET /api/configs` - List own configs
 * - `GET /api/configs/{id}` - Get an own config
 * - `PUT /api/configs/{id}` - Replace an own config
 * - `DELETE /api/configs/{id}` - Delete an own config
 *
 * ## Public gallery
 * - `GET /api/public/popular` - Newest configs
 * - `GET /api/public/search` - Search configs by name
 * - `GET /api/public/configs/{id}` - Get any config
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::configs::{
    create_config, delete_config, get_config, list_configs, update_config,
};
use crate::backend::gallery::{get_public_config, popular_configs, search_configs};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes are grouped on their own router so the auth middleware
/// only wraps them.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/configs", post(create_config).get(list_configs))
        .route(
            "/api/configs/{id}",
            get(get_config).put(update_config).delete(delete_config),
        )
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Public gallery
        .route("/api/public/popular", get(popular_configs))
        .route("/api/public/search", get(search_configs))
        .route("/api/public/configs/{id}", get(get_public_config))
        .merge(protected)
}
