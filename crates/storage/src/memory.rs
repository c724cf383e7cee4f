//! In-process storage backend.
//!
//! Used when no database is configured and throughout the test suites. Filter
//! semantics match the PostgreSQL backend: `NotEmpty` rejects null and `''`.

use std::collections::HashMap;

use async_trait::async_trait;
use storybook_core::{Character, Page, Project};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::query::{Column, CountQuery, Filter, FilterValue, Relation};
use crate::traits::{CharacterStore, CountStore, PageStore, ProjectStore};

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<String, Project>,
    pages: HashMap<String, Page>,
    characters: HashMap<String, Character>,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Column value as seen by a filter.
enum Cell<'a> {
    Text(Option<&'a str>),
    Bool(bool),
}

trait Row {
    fn project_id(&self) -> &str;
    fn cell(&self, column: Column) -> Option<Cell<'_>>;
}

impl Row for Page {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn cell(&self, column: Column) -> Option<Cell<'_>> {
        match column {
            Column::ProjectId => Some(Cell::Text(Some(&self.project_id))),
            Column::ImageUrl => Some(Cell::Text(self.image_url.as_deref())),
            Column::IsMain | Column::IsResolved => None,
        }
    }
}

impl Row for Character {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn cell(&self, column: Column) -> Option<Cell<'_>> {
        match column {
            Column::ProjectId => Some(Cell::Text(Some(&self.project_id))),
            Column::ImageUrl => Some(Cell::Text(self.image_url.as_deref())),
            Column::IsMain => Some(Cell::Bool(self.is_main)),
            Column::IsResolved => Some(Cell::Bool(self.is_resolved)),
        }
    }
}

fn row_matches(row: &impl Row, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(column, expected) => match (row.cell(*column), expected) {
            (Some(Cell::Text(Some(actual))), FilterValue::Text(expected)) => actual == expected,
            (Some(Cell::Bool(actual)), FilterValue::Bool(expected)) => actual == *expected,
            _ => false,
        },
        Filter::NotEmpty(column) => {
            matches!(row.cell(*column), Some(Cell::Text(Some(value))) if !value.is_empty())
        },
        Filter::Any(filters) => filters.iter().any(|f| row_matches(row, f)),
    }
}

fn count_rows<'a, R: Row + 'a>(rows: impl Iterator<Item = &'a R>, query: &CountQuery) -> u64 {
    let matched = rows
        .filter(|row| row.project_id() == query.project_id.as_str())
        .filter(|row| query.filters.iter().all(|f| row_matches(*row, f)))
        .count();
    u64::try_from(matched).unwrap_or(u64::MAX)
}

#[async_trait]
impl CountStore for MemoryStorage {
    async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError> {
        query.validate()?;
        let tables = self.tables.read().await;
        let count = match query.relation {
            Relation::Pages => count_rows(tables.pages.values(), query),
            Relation::Characters => count_rows(tables.characters.values(), query),
        };
        Ok(Some(count))
    }
}

#[async_trait]
impl ProjectStore for MemoryStorage {
    async fn insert_project(&self, project: &Project) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.projects.contains_key(&project.id) {
            return Err(StorageError::Duplicate(format!("project {}", project.id)));
        }
        tables.projects.insert(project.id.clone(), project.clone());
        Ok(())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError> {
        Ok(self.tables.read().await.projects.get(id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        let mut projects: Vec<Project> =
            self.tables.read().await.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn update_project(&self, project: &Project) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.projects.get_mut(&project.id) {
            Some(stored) => {
                *stored = project.clone();
                true
            },
            None => false,
        })
    }

    async fn delete_project(&self, id: &str) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(id).is_none() {
            return Ok(false);
        }
        tables.pages.retain(|_, page| page.project_id != id);
        tables.characters.retain(|_, character| character.project_id != id);
        Ok(true)
    }
}

#[async_trait]
impl PageStore for MemoryStorage {
    async fn insert_page(&self, page: &Page) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.pages.contains_key(&page.id) {
            return Err(StorageError::Duplicate(format!("page {}", page.id)));
        }
        tables.pages.insert(page.id.clone(), page.clone());
        Ok(())
    }

    async fn get_page(&self, id: &str) -> Result<Option<Page>, StorageError> {
        Ok(self.tables.read().await.pages.get(id).cloned())
    }

    async fn list_pages(&self, project_id: &str) -> Result<Vec<Page>, StorageError> {
        let mut pages: Vec<Page> = self
            .tables
            .read()
            .await
            .pages
            .values()
            .filter(|page| page.project_id == project_id)
            .cloned()
            .collect();
        pages.sort_by(|a, b| {
            a.page_number.cmp(&b.page_number).then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(pages)
    }

    async fn update_page(&self, page: &Page) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.pages.get_mut(&page.id) {
            Some(stored) => {
                *stored = page.clone();
                true
            },
            None => false,
        })
    }

    async fn delete_page(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.tables.write().await.pages.remove(id).is_some())
    }
}

#[async_trait]
impl CharacterStore for MemoryStorage {
    async fn insert_character(&self, character: &Character) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.characters.contains_key(&character.id) {
            return Err(StorageError::Duplicate(format!("character {}", character.id)));
        }
        tables.characters.insert(character.id.clone(), character.clone());
        Ok(())
    }

    async fn get_character(&self, id: &str) -> Result<Option<Character>, StorageError> {
        Ok(self.tables.read().await.characters.get(id).cloned())
    }

    async fn list_characters(&self, project_id: &str) -> Result<Vec<Character>, StorageError> {
        let mut characters: Vec<Character> = self
            .tables
            .read()
            .await
            .characters
            .values()
            .filter(|character| character.project_id == project_id)
            .cloned()
            .collect();
        characters.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(characters)
    }

    async fn update_character(&self, character: &Character) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(match tables.characters.get_mut(&character.id) {
            Some(stored) => {
                *stored = character.clone();
                true
            },
            None => false,
        })
    }

    async fn delete_character(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.tables.write().await.characters.remove(id).is_some())
    }
}
