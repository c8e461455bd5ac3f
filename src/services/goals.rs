use sqlx::PgPool;

use crate::error::AppError;
use crate::models::goal::Goal;

pub struct GoalService;

impl GoalService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Goal>, AppError> {
        let goals = sqlx::query_as::<_, Goal>("SELECT * FROM goals ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(goals)
    }

    pub async fn by_code(pool: &PgPool, code: &str) -> Result<Goal, AppError> {
        let goal = sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;
        goal.ok_or_else(|| AppError::GoalNotFound(code.to_string()))
    }

    pub async fn for_teacher(pool: &PgPool, teacher_id: i32) -> Result<Vec<Goal>, AppError> {
        let goals = sqlx::query_as::<_, Goal>(
            "SELECT g.* FROM goals g
             JOIN teachers_goals tg ON tg.goal_id = g.id
             WHERE tg.teacher_id = $1
             ORDER BY g.id",
        )
        .bind(teacher_id)
        .fetch_all(pool)
        .await?;
        Ok(goals)
    }
}
