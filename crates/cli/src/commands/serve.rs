use std::sync::Arc;

use anyhow::Result;
use storybook_core::{
    env_parse_with_default, env_required, ADMIN_PASSWORD_ENV, DATABASE_URL_ENV, SECURE_COOKIES_ENV,
};
use storybook_http::{create_router, AppState, AuthSettings};
use storybook_service::ProjectService;
use storybook_storage::StorageBackend;

async fn open_storage() -> Result<StorageBackend> {
    match std::env::var(DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Ok(StorageBackend::new_postgres(&url).await?),
        _ => {
            tracing::warn!(
                "{DATABASE_URL_ENV} not set, using in-memory storage; data is lost on exit"
            );
            Ok(StorageBackend::new_memory())
        },
    }
}

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let admin_password = env_required(ADMIN_PASSWORD_ENV)?;
    let secure_cookies = env_parse_with_default(SECURE_COOKIES_ENV, false);

    let storage = Arc::new(open_storage().await?);
    tracing::info!(backend = storage.kind(), "storage ready");

    let state = Arc::new(AppState {
        project_service: Arc::new(ProjectService::new(storage)),
        auth: AuthSettings { admin_password, secure_cookies },
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
