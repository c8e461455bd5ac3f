use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::AppError;
use crate::services::goals::GoalService;
use crate::services::teachers::TeacherService;
use crate::{views, AppState};

pub async fn by_goal(
    State(state): State<AppState>,
    Path(goal_code): Path<String>,
) -> Result<Html<String>, AppError> {
    let goal = GoalService::by_code(&state.db, &goal_code).await?;
    let teachers = TeacherService::by_goal(&state.db, &goal.code).await?;
    Ok(Html(views::pages::goal(&goal, &teachers)))
}
