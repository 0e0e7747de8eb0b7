//! Database operations for configs
//!
//! Every function takes any SQLite executor, so handlers can run them on the
//! pool or inside a transaction. Listings are ordered newest first, with the
//! row id breaking ties between configs created in the same instant.

use chrono::Utc;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqliteExecutor;

use crate::backend::configs::models::Config;
use crate::shared::ConfigPayload;

type ConfigQuery<'q> = QueryAs<'q, Sqlite, Config, SqliteArguments<'q>>;

/// Bind the mutable fields of `payload`, in column order
fn bind_payload<'q>(mut query: ConfigQuery<'q>, payload: &'q ConfigPayload) -> ConfigQuery<'q> {
    query = query.bind(payload.name.as_str());
    for color in payload.palette.colors() {
        query = query.bind(color);
    }
    query
        .bind(payload.special.opacity)
        .bind(payload.special.foreground.as_str())
        .bind(payload.special.background.as_str())
        .bind(payload.special.selection_background.as_str())
}

/// Escape `%`, `_` and `\` so `term` matches literally inside a LIKE pattern
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Create a config owned by `user_id`
pub async fn create_config<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: i64,
    payload: &ConfigPayload,
) -> Result<Config, sqlx::Error> {
    let now = Utc::now();

    let query = sqlx::query_as::<_, Config>(
        r#"
        INSERT INTO configs (
            name,
            color0, color1, color2, color3, color4, color5, color6, color7,
            color8, color9, color10, color11, color12, color13, color14, color15,
            opacity, foreground, background, selection_background,
            user_id, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    );

    bind_payload(query, payload)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
}

/// Get a config by ID, whoever owns it
pub async fn get_config<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<Option<Config>, sqlx::Error> {
    sqlx::query_as::<_, Config>("SELECT * FROM configs WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// All configs owned by `user_id`, newest first
pub async fn list_configs_for_user<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: i64,
) -> Result<Vec<Config>, sqlx::Error> {
    sqlx::query_as::<_, Config>(
        r#"
        SELECT * FROM configs
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Replace every mutable field of config `id` and bump `updated_at`
///
/// # Returns
/// The updated config, or `None` if no config has that ID
pub async fn update_config<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    payload: &ConfigPayload,
) -> Result<Option<Config>, sqlx::Error> {
    let query = sqlx::query_as::<_, Config>(
        r#"
        UPDATE configs SET
            name = ?,
            color0 = ?, color1 = ?, color2 = ?, color3 = ?,
            color4 = ?, color5 = ?, color6 = ?, color7 = ?,
            color8 = ?, color9 = ?, color10 = ?, color11 = ?,
            color12 = ?, color13 = ?, color14 = ?, color15 = ?,
            opacity = ?, foreground = ?, background = ?, selection_background = ?,
            updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    );

    bind_payload(query, payload)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Delete config `id`
///
/// # Returns
/// Whether a config was deleted
pub async fn delete_config<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM configs WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Newest configs across all users
pub async fn list_recent_configs<'e>(
    executor: impl SqliteExecutor<'e>,
    limit: i64,
) -> Result<Vec<Config>, sqlx::Error> {
    sqlx::query_as::<_, Config>(
        r#"
        SELECT * FROM configs
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// Configs whose name contains `term`, ignoring ASCII case, newest first
pub async fn search_configs<'e>(
    executor: impl SqliteExecutor<'e>,
    term: &str,
    limit: i64,
) -> Result<Vec<Config>, sqlx::Error> {
    sqlx::query_as::<_, Config>(
        r#"
        SELECT * FROM configs
        WHERE name LIKE ? ESCAPE '\'
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(like_pattern(term))
    .bind(limit)
    .fetch_all(executor)
    .await
}
