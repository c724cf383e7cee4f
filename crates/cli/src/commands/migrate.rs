//! Schema bootstrap for PostgreSQL.
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so re-running is harmless.

use storybook_storage::PgStorage;

pub(crate) async fn run() -> anyhow::Result<()> {
    let url = crate::database_url()?;
    let pg = PgStorage::connect(&url).await?;
    pg.migrate().await?;
    println!("Schema is up to date");
    Ok(())
}
