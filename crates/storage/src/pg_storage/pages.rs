//! PageStore implementation for PgStorage.

use async_trait::async_trait;
use storybook_core::Page;

use super::{row_to_page, PgStorage, PAGE_COLUMNS};
use crate::error::StorageError;
use crate::traits::PageStore;

#[async_trait]
impl PageStore for PgStorage {
    async fn insert_page(&self, page: &Page) -> Result<(), StorageError> {
        sqlx::query(&format!("INSERT INTO pages ({PAGE_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7)"))
            .bind(&page.id)
            .bind(&page.project_id)
            .bind(page.page_number)
            .bind(&page.text)
            .bind(&page.image_url)
            .bind(page.created_at)
            .bind(page.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_page(&self, id: &str) -> Result<Option<Page>, StorageError> {
        let row = sqlx::query(&format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_page(&r)).transpose()
    }

    async fn list_pages(&self, project_id: &str) -> Result<Vec<Page>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE project_id = $1
              ORDER BY page_number, created_at"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_page).collect()
    }

    async fn update_page(&self, page: &Page) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE pages SET page_number = $2, text = $3, image_url = $4, updated_at = $5
              WHERE id = $1",
        )
        .bind(&page.id)
        .bind(page.page_number)
        .bind(&page.text)
        .bind(&page.image_url)
        .bind(page.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_page(&self, id: &str) -> Result<bool, StorageError> {
        let result =
            sqlx::query("DELETE FROM pages WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
