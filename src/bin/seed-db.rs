//! Seed the marketplace database with the static demo dataset.
//!
//! Wipes all existing rows (bookings and inquiries included) and re-inserts
//! the goals, teachers, and their goal tags for a clean demo state.
//!
//! Usage:
//!   DATABASE_URL=postgres://... ./seed-db

use std::collections::HashMap;
use std::env;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;

use tutorhub_api::dataset::{GOALS, TEACHERS};
use tutorhub_api::db;
use tutorhub_api::services::schedule;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL required")?;

    println!("=== Seed TutorHub ===");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    db::init_schema(&pool).await.context("Failed to create tables")?;

    println!("Cleaning existing data...");
    sqlx::raw_sql(
        "TRUNCATE bookings, requests, teachers_goals, teachers, goals RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .context("Failed to truncate tables")?;

    println!("Inserting goals...");
    let mut goal_ids: HashMap<&str, i32> = HashMap::new();
    for (code, name) in GOALS {
        let id: i32 = sqlx::query_scalar("INSERT INTO goals (code, name) VALUES ($1, $2) RETURNING id")
            .bind(code)
            .bind(name)
            .fetch_one(&pool)
            .await
            .with_context(|| format!("Failed to insert goal {code}"))?;
        goal_ids.insert(code, id);
    }

    println!("Inserting teachers...");
    for t in &TEACHERS {
        let free = schedule::encode(&t.grid());
        let teacher_id: i32 = sqlx::query_scalar(
            "INSERT INTO teachers (name, about, rating, picture, price, free)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(t.name)
        .bind(t.about)
        .bind(t.rating)
        .bind(t.picture)
        .bind(t.price)
        .bind(&free)
        .fetch_one(&pool)
        .await
        .with_context(|| format!("Failed to insert teacher {}", t.name))?;

        for tag in t.goals {
            let goal_id = goal_ids
                .get(tag)
                .with_context(|| format!("Unknown goal tag '{tag}' on {}", t.name))?;
            sqlx::query("INSERT INTO teachers_goals (teacher_id, goal_id) VALUES ($1, $2)")
                .bind(teacher_id)
                .bind(goal_id)
                .execute(&pool)
                .await?;
        }
        println!("  {} (id {teacher_id}, {} goals)", t.name, t.goals.len());
    }

    println!("Done: {} goals, {} teachers", GOALS.len(), TEACHERS.len());
    Ok(())
}
