use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub about: String,
    pub rating: f64,
    pub picture: String,
    pub price: i32,
    /// Serialized weekly availability grid; decode through
    /// `services::schedule` before reading.
    pub free: String,
}
