use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::teacher::Teacher;

pub struct TeacherService;

impl TeacherService {
    pub async fn get(pool: &PgPool, id: i32) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        teacher.ok_or(AppError::TeacherNotFound(id))
    }

    /// Random sample of teachers for the homepage. Sampling is uniform and
    /// without replacement over the ids actually present, and clamped to
    /// the population size, so gaps in the id sequence and small datasets
    /// are both harmless.
    pub async fn random_for_home(pool: &PgPool, count: usize) -> Result<Vec<Teacher>, AppError> {
        let ids: Vec<i32> = sqlx::query_scalar("SELECT id FROM teachers")
            .fetch_all(pool)
            .await?;
        let picked = sample_ids(&ids, count, &mut rand::thread_rng());
        if picked.is_empty() {
            return Ok(Vec::new());
        }
        let teachers = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE id = ANY($1)")
            .bind(&picked)
            .fetch_all(pool)
            .await?;
        Ok(teachers)
    }

    /// Teachers tagged with a goal, best-rated first. Ties break by id so
    /// the order is deterministic.
    pub async fn by_goal(pool: &PgPool, goal_code: &str) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT t.* FROM teachers t
             JOIN teachers_goals tg ON tg.teacher_id = t.id
             JOIN goals g ON g.id = tg.goal_id
             WHERE g.code = $1
             ORDER BY t.rating DESC, t.id ASC",
        )
        .bind(goal_code)
        .fetch_all(pool)
        .await?;
        Ok(teachers)
    }
}

/// Uniform sample without replacement, clamped to the population size.
pub fn sample_ids<R: Rng + ?Sized>(ids: &[i32], count: usize, rng: &mut R) -> Vec<i32> {
    ids.choose_multiple(rng, count.min(ids.len()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_has_requested_size_and_no_duplicates() {
        let ids: Vec<i32> = (1..=50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_ids(&ids, 6, &mut rng);
        assert_eq!(picked.len(), 6);
        let mut unique = picked.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert!(picked.iter().all(|id| ids.contains(id)));
    }

    #[test]
    fn sample_clamps_to_population() {
        let ids = vec![3, 9, 27];
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample_ids(&ids, 10, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, ids);
    }

    #[test]
    fn sample_handles_gappy_id_sequences() {
        let ids = vec![2, 40, 41, 900];
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_ids(&ids, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|id| ids.contains(id)));
    }

    #[test]
    fn empty_population_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_ids(&[], 6, &mut rng).is_empty());
    }
}
