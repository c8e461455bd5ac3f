use sqlx::PgPool;

use crate::error::AppError;
use crate::models::booking::{Booking, NewBooking};
use crate::models::teacher::Teacher;
use crate::services::schedule;
use crate::services::teachers::TeacherService;

pub struct BookingService;

impl BookingService {
    /// Commit a booking: flip the targeted slot to taken and insert the
    /// booking row, both inside one transaction. Returns the resolved
    /// teacher alongside the created booking for confirmation rendering.
    ///
    /// A slot that exists but is already taken is not rejected: the cell is
    /// overwritten and the booking row inserted anyway, so racing or
    /// resubmitted forms can double-book. Intentionally kept; only a
    /// fabricated (day, time) pair fails, with `UnknownSlot`.
    pub async fn book(pool: &PgPool, intent: &NewBooking) -> Result<(Teacher, Booking), AppError> {
        let teacher = TeacherService::get(pool, intent.teacher_id).await?;

        let mut grid = schedule::decode(&teacher.free)?;
        if !schedule::is_free(&grid, &intent.day, &intent.time) {
            tracing::warn!(
                teacher_id = teacher.id,
                day = %intent.day,
                time = %intent.time,
                "booking a slot not marked free"
            );
        }
        schedule::mark_taken(&mut grid, &intent.day, &intent.time)?;
        let encoded = schedule::encode(&grid);

        let mut tx = pool.begin().await?;
        sqlx::query("UPDATE teachers SET free = $1 WHERE id = $2")
            .bind(&encoded)
            .bind(teacher.id)
            .execute(&mut *tx)
            .await?;
        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (day, time, client_name, client_phone, teacher_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&intent.day)
        .bind(&intent.time)
        .bind(&intent.client_name)
        .bind(&intent.client_phone)
        .bind(teacher.id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok((teacher, booking))
    }
}
