use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the application tables (idempotent — safe to call on every startup).
pub async fn init_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::raw_sql(
        r#"CREATE TABLE IF NOT EXISTS teachers (
            id       SERIAL PRIMARY KEY,
            name     TEXT NOT NULL UNIQUE,
            about    TEXT NOT NULL,
            rating   DOUBLE PRECISION NOT NULL,
            picture  TEXT NOT NULL,
            price    INTEGER NOT NULL,
            free     TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::raw_sql(
        r#"CREATE TABLE IF NOT EXISTS goals (
            id   SERIAL PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::raw_sql(
        r#"CREATE TABLE IF NOT EXISTS teachers_goals (
            teacher_id INTEGER NOT NULL REFERENCES teachers(id) ON DELETE CASCADE,
            goal_id    INTEGER NOT NULL REFERENCES goals(id) ON DELETE CASCADE,
            PRIMARY KEY (teacher_id, goal_id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::raw_sql(
        r#"CREATE TABLE IF NOT EXISTS bookings (
            id           SERIAL PRIMARY KEY,
            day          TEXT NOT NULL,
            time         TEXT NOT NULL,
            client_name  TEXT NOT NULL,
            client_phone TEXT NOT NULL,
            teacher_id   INTEGER NOT NULL REFERENCES teachers(id),
            created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::raw_sql(
        r#"CREATE TABLE IF NOT EXISTS requests (
            id           SERIAL PRIMARY KEY,
            time         TEXT NOT NULL,
            client_name  TEXT NOT NULL,
            client_phone TEXT NOT NULL,
            goal_id      INTEGER NOT NULL REFERENCES goals(id),
            created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
