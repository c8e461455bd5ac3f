use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::AppError;
use crate::services::goals::GoalService;
use crate::services::schedule;
use crate::services::teachers::TeacherService;
use crate::{views, AppState};

pub async fn profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let teacher = TeacherService::get(&state.db, profile_id).await?;
    let grid = schedule::decode(&teacher.free)?;
    let goals = GoalService::for_teacher(&state.db, teacher.id).await?;
    Ok(Html(views::pages::profile(&teacher, &grid, &goals)))
}
