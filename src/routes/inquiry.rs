use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::error::AppError;
use crate::models::forms::{FieldErrors, RequestForm};
use crate::services::goals::GoalService;
use crate::services::inquiries::InquiryService;
use crate::{views, AppState};

pub async fn show(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let goals = GoalService::list(&state.db).await?;
    Ok(Html(views::pages::request_form(
        &goals,
        &RequestForm::default(),
        &FieldErrors::default(),
    )))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<RequestForm>,
) -> Result<Html<String>, AppError> {
    let errors = form.validate();
    if !errors.is_empty() {
        let goals = GoalService::list(&state.db).await?;
        return Ok(Html(views::pages::request_form(&goals, &form, &errors)));
    }
    let (goal, inquiry) = InquiryService::submit(&state.db, &form).await?;
    Ok(Html(views::pages::request_done(&goal, &inquiry)))
}
