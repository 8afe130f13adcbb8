use anyhow::Context;
use trivia_api::config::Settings;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::{server::app::run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Invalid configuration")?;
    let pool = establish_connection(&settings.database_url)
        .await
        .with_context(|| format!("Cannot connect to {}", settings.database_url))?;

    if settings.run_migrations {
        tracing::info!("Running db migrations...");
        run_migrations(&pool).await?;
    }

    run_server(pool, &settings.listen_addr).await
}
