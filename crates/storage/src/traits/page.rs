use async_trait::async_trait;
use storybook_core::Page;

use crate::error::StorageError;

/// Page record persistence.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn insert_page(&self, page: &Page) -> Result<(), StorageError>;

    async fn get_page(&self, id: &str) -> Result<Option<Page>, StorageError>;

    /// Pages of one project ordered by page number.
    async fn list_pages(&self, project_id: &str) -> Result<Vec<Page>, StorageError>;

    async fn update_page(&self, page: &Page) -> Result<bool, StorageError>;

    async fn delete_page(&self, id: &str) -> Result<bool, StorageError>;
}
