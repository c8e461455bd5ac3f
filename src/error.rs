use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::views;

/// Application-level failures. Form validation errors are not represented
/// here — invalid forms re-render with field messages instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("teacher {0} not found")]
    TeacherNotFound(i32),

    #[error("goal '{0}' not found")]
    GoalNotFound(String),

    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("no slot at {day} {time}")]
    UnknownSlot { day: String, time: String },

    /// A teacher's stored availability grid failed to decode. Never
    /// user-attributable; treated as a server fault.
    #[error("malformed availability grid: {0}")]
    InvalidSchedule(#[from] serde_json::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TeacherNotFound(_)
            | AppError::GoalNotFound(_)
            | AppError::UnknownWeekday(_)
            | AppError::UnknownSlot { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidSchedule(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        (status, Html(views::pages::error_page(status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_map_to_404() {
        assert_eq!(AppError::TeacherNotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::GoalNotFound("study".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::UnknownWeekday("funday".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::UnknownSlot { day: "mon".into(), time: "10:00".into() }.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn malformed_grid_is_a_server_fault() {
        let err = AppError::from(serde_json::from_str::<i32>("oops").unwrap_err());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
