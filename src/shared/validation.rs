//! Input Validation
//!
//! Shape checks applied to request bodies before they reach the account or
//! config flows. Every check returns a [`SharedError::ValidationError`]
//! naming the offending field.

use crate::shared::error::SharedError;

/// Minimum username length, in characters
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length, in characters
pub const USERNAME_MAX_LEN: usize = 50;
/// Minimum password length, in characters
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length, in UTF-8 bytes
///
/// bcrypt reads 72 bytes including a terminating NUL.
pub const PASSWORD_MAX_BYTES: usize = 71;
/// Maximum email length, matching the `users.email` column
pub const EMAIL_MAX_LEN: usize = 100;
/// Maximum config name length, in characters
pub const CONFIG_NAME_MAX_LEN: usize = 255;
/// Page size used when a listing request gives no limit
pub const DEFAULT_PAGE_LIMIT: i64 = 20;
/// Largest page size a listing request may ask for
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Validate username format
///
/// Usernames must be 3-50 characters long and contain only letters and
/// digits.
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(SharedError::validation("username", "must be 3-50 characters"));
    }
    if !username.chars().all(char::is_alphanumeric) {
        return Err(SharedError::validation("username", "must be alphanumeric"));
    }
    Ok(())
}

/// Validate password strength
///
/// Passwords are 8 characters to 71 bytes long.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(SharedError::validation("password", "must be at most 71 bytes"));
    }
    Ok(())
}

/// Normalize an email address for storage and lookup
///
/// Emails are compared case-insensitively, so both registration and login
/// go through this before touching the credential store.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate email syntax
///
/// Accepts `local@domain.tld` where the local part is non-empty, the domain
/// has at least one dot with non-empty labels, and there is no whitespace.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let invalid = || SharedError::validation("email", "value is not a valid email address");

    if email.is_empty() || email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validate a `#rrggbb` color value
pub fn validate_color(field: &str, value: &str) -> Result<(), SharedError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a #rrggbb hex color"))
    }
}

/// Validate a config name
pub fn validate_config_name(name: &str) -> Result<(), SharedError> {
    if name.trim().is_empty() {
        return Err(SharedError::validation("name", "must not be empty"));
    }
    if name.chars().count() > CONFIG_NAME_MAX_LEN {
        return Err(SharedError::validation("name", "must be at most 255 characters"));
    }
    Ok(())
}

/// Validate terminal opacity
pub fn validate_opacity(opacity: f64) -> Result<(), SharedError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(SharedError::validation("opacity", "must be between 0.0 and 1.0"))
    }
}

/// Resolve the page size of a gallery listing
pub fn resolve_limit(limit: Option<i64>) -> Result<i64, SharedError> {
    match limit {
        None => Ok(DEFAULT_PAGE_LIMIT),
        Some(n) if (1..=MAX_PAGE_LIMIT).contains(&n) => Ok(n),
        Some(_) => Err(SharedError::validation("limit", "must be between 1 and 100")),
    }
}

/// Validate a gallery search term
pub fn validate_search_query(query: &str) -> Result<(), SharedError> {
    if query.is_empty() {
        return Err(SharedError::validation("q", "must not be empty"));
    }
    Ok(())
}
