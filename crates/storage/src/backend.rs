//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use storybook_core::{Character, Page, Project};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::query::CountQuery;
use crate::traits::{CharacterStore, CountStore, PageStore, ProjectStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── ProjectStore ─────────────────────────────────────────────────

#[async_trait]
impl ProjectStore for StorageBackend {
    async fn insert_project(&self, project: &Project) -> Result<(), StorageError> {
        dispatch!(self, ProjectStore, insert_project(project))
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError> {
        dispatch!(self, ProjectStore, get_project(id))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        dispatch!(self, ProjectStore, list_projects())
    }

    async fn update_project(&self, project: &Project) -> Result<bool, StorageError> {
        dispatch!(self, ProjectStore, update_project(project))
    }

    async fn delete_project(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, ProjectStore, delete_project(id))
    }
}

// ── PageStore ────────────────────────────────────────────────────

#[async_trait]
impl PageStore for StorageBackend {
    async fn insert_page(&self, page: &Page) -> Result<(), StorageError> {
        dispatch!(self, PageStore, insert_page(page))
    }

    async fn get_page(&self, id: &str) -> Result<Option<Page>, StorageError> {
        dispatch!(self, PageStore, get_page(id))
    }

    async fn list_pages(&self, project_id: &str) -> Result<Vec<Page>, StorageError> {
        dispatch!(self, PageStore, list_pages(project_id))
    }

    async fn update_page(&self, page: &Page) -> Result<bool, StorageError> {
        dispatch!(self, PageStore, update_page(page))
    }

    async fn delete_page(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, PageStore, delete_page(id))
    }
}

// ── CharacterStore ───────────────────────────────────────────────

#[async_trait]
impl CharacterStore for StorageBackend {
    async fn insert_character(&self, character: &Character) -> Result<(), StorageError> {
        dispatch!(self, CharacterStore, insert_character(character))
    }

    async fn get_character(&self, id: &str) -> Result<Option<Character>, StorageError> {
        dispatch!(self, CharacterStore, get_character(id))
    }

    async fn list_characters(&self, project_id: &str) -> Result<Vec<Character>, StorageError> {
        dispatch!(self, CharacterStore, list_characters(project_id))
    }

    async fn update_character(&self, character: &Character) -> Result<bool, StorageError> {
        dispatch!(self, CharacterStore, update_character(character))
    }

    async fn delete_character(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, CharacterStore, delete_character(id))
    }
}

// ── CountStore ───────────────────────────────────────────────────

#[async_trait]
impl CountStore for StorageBackend {
    async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError> {
        dispatch!(self, CountStore, count(query))
    }
}
