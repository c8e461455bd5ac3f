use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe. Counts the teachers table so an empty or unmigrated
/// database is distinguishable from a dead connection.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers")
        .fetch_one(&state.db)
        .await
    {
        Ok(teachers) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "service": "tutorhub", "teachers": teachers })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "service": "tutorhub", "db": e.to_string() })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use sqlx::PgPool;

    use crate::config::Config;
    use crate::db;

    fn state(pool: PgPool) -> AppState {
        AppState {
            db: pool,
            config: Arc::new(Config {
                database_url: String::new(),
                host: "127.0.0.1".into(),
                port: 0,
                teachers_on_home: 6,
            }),
        }
    }

    #[sqlx::test]
    async fn reports_ok_with_the_teacher_count(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let (status, Json(body)) = health_check(State(state(pool))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "tutorhub");
        assert_eq!(body["teachers"], 0);
    }

    #[sqlx::test]
    async fn reports_error_when_the_tables_are_missing(pool: PgPool) {
        let (status, Json(body)) = health_check(State(state(pool))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
    }
}
