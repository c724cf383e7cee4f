//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by record type.

mod characters;
mod counts;
mod pages;
mod projects;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use storybook_core::{
    env_parse_with_default, Character, Page, Project, PG_MAX_CONNECTIONS_ENV,
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

const PROJECT_COLUMNS: &str = "id, title, description, created_at, updated_at";

const PAGE_COLUMNS: &str = "id, project_id, page_number, text, image_url, created_at, updated_at";

const CHARACTER_COLUMNS: &str =
    "id, project_id, name, description, image_url, is_main, is_resolved, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and bootstrap the schema.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let storage = Self::connect(database_url).await?;
        run_pg_migrations(&storage.pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(storage)
    }

    /// Connect without touching the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_with_default(PG_MAX_CONNECTIONS_ENV, PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Create tables and indexes if they are missing.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await
    }
}

pub(crate) fn row_to_project(row: &PgRow) -> Result<Project, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        created_at,
        updated_at,
    })
}

pub(crate) fn row_to_page(row: &PgRow) -> Result<Page, StorageError> {
    Ok(Page {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        page_number: row.try_get("page_number")?,
        text: row.try_get("text")?,
        image_url: row.try_get("image_url")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_character(row: &PgRow) -> Result<Character, StorageError> {
    Ok(Character {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        is_main: row.try_get("is_main")?,
        is_resolved: row.try_get("is_resolved")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
