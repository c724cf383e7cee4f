use std::sync::Arc;

use chrono::Utc;
use storybook_core::{
    Character, CharacterUpdate, CountSummary, NewCharacter, NewPage, NewProject, Page, PageUpdate,
    Project, ProjectId, ProjectOverview, ProjectUpdate,
};
use storybook_storage::traits::{CharacterStore, PageStore, ProjectStore};
use storybook_storage::{StorageBackend, StorageError};
use uuid::Uuid;

use crate::ServiceError;
use crate::summary::read_project_summary;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trimmed `value`, or `InvalidInput` if nothing is left.
fn require_text(field: &str, value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_owned())
}

fn require_page_number(page_number: i32) -> Result<(), ServiceError> {
    if page_number < 1 {
        return Err(ServiceError::InvalidInput(format!(
            "page_number must be at least 1, got {page_number}"
        )));
    }
    Ok(())
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ServiceError> {
    ProjectId::parse(raw)
        .ok_or_else(|| ServiceError::InvalidInput("project id must not be empty".to_owned()))
}

/// Projects with their pages and characters.
pub struct ProjectService {
    storage: Arc<StorageBackend>,
}

impl ProjectService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    async fn ensure_project(&self, project_id: &str) -> Result<(), ServiceError> {
        match self.storage.get_project(project_id).await? {
            Some(_) => Ok(()),
            None => Err(StorageError::not_found("project", project_id).into()),
        }
    }

    // ── Projects ───────────────────────────────────────────────────

    pub async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_projects().await?)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ServiceError> {
        self.storage
            .get_project(id)
            .await?
            .ok_or_else(|| StorageError::not_found("project", id).into())
    }

    pub async fn create_project(&self, input: NewProject) -> Result<Project, ServiceError> {
        let title = require_text("title", &input.title)?;
        let now = Utc::now();
        let project = Project {
            id: new_id(),
            title,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        self.storage.insert_project(&project).await?;
        tracing::info!(project_id = %project.id, "project created");
        Ok(project)
    }

    pub async fn update_project(
        &self,
        id: &str,
        mut update: ProjectUpdate,
    ) -> Result<Project, ServiceError> {
        update.title = update.title.map(|title| require_text("title", &title)).transpose()?;
        let mut project = self.get_project(id).await?;
        project.apply(update, Utc::now());
        if !self.storage.update_project(&project).await? {
            return Err(StorageError::not_found("project", id).into());
        }
        Ok(project)
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ServiceError> {
        if !self.storage.delete_project(id).await? {
            return Err(StorageError::not_found("project", id).into());
        }
        tracing::info!(project_id = %id, "project deleted");
        Ok(())
    }

    /// Page, character and image counts of one project.
    ///
    /// Only checks that an id was given; an unknown project reads as empty.
    pub async fn summary(&self, project_id: &str) -> Result<CountSummary, ServiceError> {
        let project_id = parse_project_id(project_id)?;
        read_project_summary(self.storage.as_ref(), &project_id).await
    }

    /// Every project with its summary, newest first.
    pub async fn overview(&self) -> Result<Vec<ProjectOverview>, ServiceError> {
        let projects = self.storage.list_projects().await?;
        let mut rows = Vec::with_capacity(projects.len());
        for project in projects {
            let summary = self.summary(&project.id).await?;
            rows.push(ProjectOverview { project, summary });
        }
        Ok(rows)
    }

    // ── Pages ──────────────────────────────────────────────────────

    pub async fn list_pages(&self, project_id: &str) -> Result<Vec<Page>, ServiceError> {
        self.ensure_project(project_id).await?;
        Ok(self.storage.list_pages(project_id).await?)
    }

    pub async fn get_page(&self, id: &str) -> Result<Page, ServiceError> {
        self.storage.get_page(id).await?.ok_or_else(|| StorageError::not_found("page", id).into())
    }

    pub async fn create_page(
        &self,
        project_id: &str,
        input: NewPage,
    ) -> Result<Page, ServiceError> {
        require_page_number(input.page_number)?;
        self.ensure_project(project_id).await?;
        let now = Utc::now();
        let page = Page {
            id: new_id(),
            project_id: project_id.to_owned(),
            page_number: input.page_number,
            text: input.text,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        };
        self.storage.insert_page(&page).await?;
        Ok(page)
    }

    pub async fn update_page(&self, id: &str, update: PageUpdate) -> Result<Page, ServiceError> {
        if let Some(page_number) = update.page_number {
            require_page_number(page_number)?;
        }
        let mut page = self.get_page(id).await?;
        page.apply(update, Utc::now());
        if !self.storage.update_page(&page).await? {
            return Err(StorageError::not_found("page", id).into());
        }
        Ok(page)
    }

    pub async fn delete_page(&self, id: &str) -> Result<(), ServiceError> {
        if !self.storage.delete_page(id).await? {
            return Err(StorageError::not_found("page", id).into());
        }
        Ok(())
    }

    // ── Characters ─────────────────────────────────────────────────

    pub async fn list_characters(&self, project_id: &str) -> Result<Vec<Character>, ServiceError> {
        self.ensure_project(project_id).await?;
        Ok(self.storage.list_characters(project_id).await?)
    }

    pub async fn get_character(&self, id: &str) -> Result<Character, ServiceError> {
        self.storage
            .get_character(id)
            .await?
            .ok_or_else(|| StorageError::not_found("character", id).into())
    }

    pub async fn create_character(
        &self,
        project_id: &str,
        input: NewCharacter,
    ) -> Result<Character, ServiceError> {
        let name = require_text("name", &input.name)?;
        self.ensure_project(project_id).await?;
        let now = Utc::now();
        let character = Character {
            id: new_id(),
            project_id: project_id.to_owned(),
            name,
            description: input.description,
            image_url: input.image_url,
            is_main: input.is_main,
            is_resolved: input.is_resolved,
            created_at: now,
            updated_at: now,
        };
        self.storage.insert_character(&character).await?;
        Ok(character)
    }

    pub async fn update_character(
        &self,
        id: &str,
        mut update: CharacterUpdate,
    ) -> Result<Character, ServiceError> {
        update.name = update.name.map(|name| require_text("name", &name)).transpose()?;
        let mut character = self.get_character(id).await?;
        character.apply(update, Utc::now());
        if !self.storage.update_character(&character).await? {
            return Err(StorageError::not_found("character", id).into());
        }
        Ok(character)
    }

    pub async fn delete_character(&self, id: &str) -> Result<(), ServiceError> {
        if !self.storage.delete_character(id).await? {
            return Err(StorageError::not_found("character", id).into());
        }
        Ok(())
    }
}
