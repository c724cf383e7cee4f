use async_trait::async_trait;

use crate::error::StorageError;
use crate::query::CountQuery;

/// Exact row counts over a filtered relation.
#[async_trait]
pub trait CountStore: Send + Sync {
    /// Count rows matching `query`. `Ok(None)` means the store reported a null count.
    async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError>;
}
