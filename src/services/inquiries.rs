use sqlx::PgPool;

use crate::error::AppError;
use crate::models::forms::RequestForm;
use crate::models::goal::Goal;
use crate::models::inquiry::Inquiry;
use crate::services::goals::GoalService;

pub struct InquiryService;

impl InquiryService {
    /// Persist a validated inquiry. The goal code must resolve to a seeded
    /// goal; a straight insert otherwise, no availability interaction.
    pub async fn submit(pool: &PgPool, form: &RequestForm) -> Result<(Goal, Inquiry), AppError> {
        let goal = GoalService::by_code(pool, &form.goal).await?;
        let inquiry = sqlx::query_as::<_, Inquiry>(
            "INSERT INTO requests (time, client_name, client_phone, goal_id)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&form.time)
        .bind(form.client_name.trim())
        .bind(form.client_phone.trim())
        .bind(goal.id)
        .fetch_one(pool)
        .await?;
        Ok((goal, inquiry))
    }
}
