use async_trait::async_trait;
use storybook_core::Project;

use crate::error::StorageError;

/// Project record persistence.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert_project(&self, project: &Project) -> Result<(), StorageError>;

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError>;

    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, StorageError>;

    /// Overwrite a stored project. Returns `false` if no row matched.
    async fn update_project(&self, project: &Project) -> Result<bool, StorageError>;

    /// Delete a project with its pages and characters. Returns `false` if no row matched.
    async fn delete_project(&self, id: &str) -> Result<bool, StorageError>;
}
