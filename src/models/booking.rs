use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub day: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub teacher_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A validated booking intent, ready to be committed.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub teacher_id: i32,
    pub day: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
}
