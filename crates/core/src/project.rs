//! Project, page and character records plus their create/update inputs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque key of one project record. Only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap a raw id as given, rejecting empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        (!raw.trim().is_empty()).then(|| Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Project {
    pub fn apply(&mut self, update: ProjectUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.updated_at = now;
    }
}

/// One illustrated page of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub project_id: String,
    pub page_number: i32,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPage {
    pub page_number: i32,
    pub text: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageUpdate {
    pub page_number: Option<i32>,
    pub text: Option<String>,
    pub image_url: Option<String>,
}

impl Page {
    pub fn apply(&mut self, update: PageUpdate, now: DateTime<Utc>) {
        if let Some(page_number) = update.page_number {
            self.page_number = page_number;
        }
        if let Some(text) = update.text {
            self.text = Some(text);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = now;
    }
}

/// A recurring character of a project, with its reference illustration.
///
/// `is_main` marks protagonists; `is_resolved` marks a main character whose
/// reference image has been signed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_main: bool,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn apply(&mut self, update: CharacterUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(is_main) = update.is_main {
            self.is_main = is_main;
        }
        if let Some(is_resolved) = update.is_resolved {
            self.is_resolved = is_resolved;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub is_resolved: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_main: Option<bool>,
    pub is_resolved: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_rejects_blank() {
        assert!(ProjectId::parse("").is_none());
        assert!(ProjectId::parse("   ").is_none());
        assert_eq!(ProjectId::parse("p-1").map(|id| id.to_string()), Some("p-1".to_owned()));
    }

    #[test]
    fn project_id_keeps_surrounding_whitespace() {
        let id = ProjectId::parse(" book-1").unwrap();
        assert_eq!(id.as_str(), " book-1");
    }

    #[test]
    fn partial_update_keeps_untouched_fields() {
        let created = Utc::now();
        let mut page = Page {
            id: "pg".to_owned(),
            project_id: "p".to_owned(),
            page_number: 3,
            text: Some("Once upon a time".to_owned()),
            image_url: None,
            created_at: created,
            updated_at: created,
        };
        let later = created + chrono::Duration::seconds(5);
        let update = PageUpdate { image_url: Some("img.png".to_owned()), ..Default::default() };
        page.apply(update, later);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.text.as_deref(), Some("Once upon a time"));
        assert_eq!(page.image_url.as_deref(), Some("img.png"));
        assert_eq!(page.updated_at, later);
    }
}
