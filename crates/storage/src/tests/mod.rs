//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, Utc};
use storybook_core::{Character, Page, Project};

mod count_tests;

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + offset_secs, 0).unwrap()
}

pub fn create_test_project(id: &str) -> Project {
    Project {
        id: id.to_owned(),
        title: format!("Project {id}"),
        description: None,
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn create_test_page(id: &str, project_id: &str, page_number: i32) -> Page {
    Page {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        page_number,
        text: Some(format!("Text of page {page_number}")),
        image_url: None,
        created_at: at(i64::from(page_number)),
        updated_at: at(i64::from(page_number)),
    }
}

pub fn create_test_character(
    id: &str,
    project_id: &str,
    image_url: Option<&str>,
    is_main: bool,
    is_resolved: bool,
) -> Character {
    Character {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        name: format!("Character {id}"),
        description: None,
        image_url: image_url.map(str::to_owned),
        is_main,
        is_resolved,
        created_at: at(0),
        updated_at: at(0),
    }
}
