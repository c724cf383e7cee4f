//! CharacterStore implementation for PgStorage.

use async_trait::async_trait;
use storybook_core::Character;

use super::{row_to_character, PgStorage, CHARACTER_COLUMNS};
use crate::error::StorageError;
use crate::traits::CharacterStore;

#[async_trait]
impl CharacterStore for PgStorage {
    async fn insert_character(&self, character: &Character) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO characters ({CHARACTER_COLUMNS}) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)"
        ))
        .bind(&character.id)
        .bind(&character.project_id)
        .bind(&character.name)
        .bind(&character.description)
        .bind(&character.image_url)
        .bind(character.is_main)
        .bind(character.is_resolved)
        .bind(character.created_at)
        .bind(character.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_character(&self, id: &str) -> Result<Option<Character>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_character(&r)).transpose()
    }

    async fn list_characters(&self, project_id: &str) -> Result<Vec<Character>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE project_id = $1
              ORDER BY created_at, id"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_character).collect()
    }

    async fn update_character(&self, character: &Character) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE characters
                SET name = $2, description = $3, image_url = $4,
                    is_main = $5, is_resolved = $6, updated_at = $7
              WHERE id = $1",
        )
        .bind(&character.id)
        .bind(&character.name)
        .bind(&character.description)
        .bind(&character.image_url)
        .bind(character.is_main)
        .bind(character.is_resolved)
        .bind(character.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_character(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
