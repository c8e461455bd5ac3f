use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visitor's general inquiry ("request" table) — not tied to a teacher
/// or a slot, only to a learning goal and a weekly time budget.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inquiry {
    pub id: i32,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub goal_id: i32,
    pub created_at: DateTime<Utc>,
}
