//! ProjectStore implementation for PgStorage.

use async_trait::async_trait;
use storybook_core::Project;

use super::{row_to_project, PgStorage, PROJECT_COLUMNS};
use crate::error::StorageError;
use crate::traits::ProjectStore;

#[async_trait]
impl ProjectStore for PgStorage {
    async fn insert_project(&self, project: &Project) -> Result<(), StorageError> {
        sqlx::query(&format!("INSERT INTO projects ({PROJECT_COLUMNS}) VALUES ($1,$2,$3,$4,$5)"))
            .bind(&project.id)
            .bind(&project.title)
            .bind(&project.description)
            .bind(project.created_at)
            .bind(project.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError> {
        let row = sqlx::query(&format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_project(&r)).transpose()
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_project).collect()
    }

    async fn update_project(&self, project: &Project) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE projects SET title = $2, description = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(&project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, id: &str) -> Result<bool, StorageError> {
        // pages and characters go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
