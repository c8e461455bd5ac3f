use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i32,
    /// Internal key used in URLs and filtering, e.g. "travel".
    pub code: String,
    /// Display name, e.g. "For travel".
    pub name: String,
}
