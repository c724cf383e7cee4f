use async_trait::async_trait;
use storybook_core::Character;

use crate::error::StorageError;

/// Character record persistence.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    async fn insert_character(&self, character: &Character) -> Result<(), StorageError>;

    async fn get_character(&self, id: &str) -> Result<Option<Character>, StorageError>;

    /// Characters of one project in creation order.
    async fn list_characters(&self, project_id: &str) -> Result<Vec<Character>, StorageError>;

    async fn update_character(&self, character: &Character) -> Result<bool, StorageError>;

    async fn delete_character(&self, id: &str) -> Result<bool, StorageError>;
}
