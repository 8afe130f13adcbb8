pub mod queries;
pub mod transfer;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error;

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

/// Memory urls (`sqlite::memory:`) get the single-connection pool of
/// [`establish_memory_connection`].
pub async fn establish_connection(url: &str) -> Result<SqlitePool, Error> {
    if is_memory_url(url) {
        return establish_memory_connection().await;
    }
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// A private in-memory database. The pool keeps exactly one connection alive,
/// since every new sqlite memory connection starts out empty.
pub async fn establish_memory_connection() -> Result<SqlitePool, Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

fn is_memory_url(url: &str) -> bool {
    let path = url.trim_start_matches("sqlite:").trim_start_matches("//");
    path == ":memory:" || path.starts_with(":memory:?") || url.contains("mode=memory")
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
