/**
 * Config Models
 *
 * The stored config row and the two JSON views of it: the owner's full view
 * and the public gallery view, which leaves out the owner and the extended
 * palette.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::guard::Owned;
use crate::shared::{Palette, SpecialColors};

/// Config row as stored in the `configs` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Config {
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    pub name: String,
    #[sqlx(flatten)]
    pub palette: Palette,
    #[sqlx(flatten)]
    pub special: SpecialColors,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Config {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Full config, returned to its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub palette: Palette,
    #[serde(flatten)]
    pub special: SpecialColors,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        Self {
            id: config.id,
            user_id: config.user_id,
            name: config.name,
            palette: config.palette,
            special: config.special,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

/// Gallery view of a config
///
/// Carries only the base eight colors and no owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPublicResponse {
    pub id: i64,
    pub name: String,
    pub color0: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub color6: String,
    pub color7: String,
    pub opacity: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Config> for ConfigPublicResponse {
    fn from(config: Config) -> Self {
        let Palette {
            color0,
            color1,
            color2,
            color3,
            color4,
            color5,
            color6,
            color7,
            ..
        } = config.palette;

        Self {
            id: config.id,
            name: config.name,
            color0,
            color1,
            color2,
            color3,
            color4,
            color5,
            color6,
            color7,
            opacity: config.special.opacity,
            created_at: config.created_at,
        }
    }
}
