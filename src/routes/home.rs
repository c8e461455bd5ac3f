use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::services::goals::GoalService;
use crate::services::teachers::TeacherService;
use crate::{views, AppState};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let teachers =
        TeacherService::random_for_home(&state.db, state.config.teachers_on_home).await?;
    let goals = GoalService::list(&state.db).await?;
    Ok(Html(views::pages::index(&teachers, &goals)))
}
