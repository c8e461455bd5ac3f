use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorhub_api::config::Config;
use tutorhub_api::{db, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let pool = db::create_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;
    info!("Database connected and schema ready");

    let state = AppState {
        db: pool,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(routes::home::index))
        .route("/goals/{goal_code}/", get(routes::goals::by_goal))
        .route("/profiles/{profile_id}/", get(routes::profiles::profile))
        .route(
            "/booking/{profile_id}/{day}/{time}/",
            get(routes::booking::show).post(routes::booking::submit),
        )
        .route(
            "/request/",
            get(routes::inquiry::show).post(routes::inquiry::submit),
        )
        .route("/health", get(routes::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("TutorHub listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
