use std::sync::Arc;

use storybook_service::ProjectService;
use storybook_storage::StorageBackend;

pub(crate) async fn run(project_id: &str) -> anyhow::Result<()> {
    let url = crate::database_url()?;
    let storage = Arc::new(StorageBackend::new_postgres(&url).await?);
    let summary = ProjectService::new(storage).summary(project_id).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
