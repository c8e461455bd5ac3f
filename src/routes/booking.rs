use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;

use crate::error::AppError;
use crate::models::booking::NewBooking;
use crate::models::forms::{BookingForm, FieldErrors};
use crate::services::bookings::BookingService;
use crate::services::schedule;
use crate::services::teachers::TeacherService;
use crate::{views, AppState};

pub async fn show(
    State(state): State<AppState>,
    Path((profile_id, day, time)): Path<(i32, String, String)>,
) -> Result<Html<String>, AppError> {
    let day_label =
        schedule::weekday_label(&day).ok_or_else(|| AppError::UnknownWeekday(day.clone()))?;
    let teacher = TeacherService::get(&state.db, profile_id).await?;
    Ok(Html(views::pages::booking_form(
        &teacher,
        &day,
        day_label,
        &time,
        &BookingForm::default(),
        &FieldErrors::default(),
    )))
}

pub async fn submit(
    State(state): State<AppState>,
    Path((profile_id, day, time)): Path<(i32, String, String)>,
    Form(form): Form<BookingForm>,
) -> Result<Html<String>, AppError> {
    let errors = form.validate();
    if !errors.is_empty() {
        let day_label =
            schedule::weekday_label(&day).ok_or_else(|| AppError::UnknownWeekday(day.clone()))?;
        let teacher = TeacherService::get(&state.db, profile_id).await?;
        return Ok(Html(views::pages::booking_form(
            &teacher, &day, day_label, &time, &form, &errors,
        )));
    }

    // The hidden fields are what gets booked; the path only addresses the
    // form page. Do not trust either beyond the checks below.
    let day_label = schedule::weekday_label(&form.client_weekday)
        .ok_or_else(|| AppError::UnknownWeekday(form.client_weekday.clone()))?;
    let intent = NewBooking {
        teacher_id: form.client_teacher,
        day: form.client_weekday.clone(),
        time: form.client_time.clone(),
        client_name: form.client_name.trim().to_string(),
        client_phone: form.client_phone.trim().to_string(),
    };
    let (teacher, booking) = BookingService::book(&state.db, &intent).await?;
    Ok(Html(views::pages::booking_done(&teacher, &booking, day_label)))
}
