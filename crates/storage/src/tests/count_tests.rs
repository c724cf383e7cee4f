use storybook_core::ProjectId;

use super::{create_test_character, create_test_page, create_test_project};
use crate::query::{Column, CountQuery, Filter, Relation};
use crate::traits::{CharacterStore, CountStore, PageStore, ProjectStore};
use crate::{MemoryStorage, StorageError};

fn project_id(raw: &str) -> ProjectId {
    ProjectId::parse(raw).unwrap()
}

fn illustrated(raw: &str) -> CountQuery {
    CountQuery::new(Relation::Characters, project_id(raw))
        .filter(Filter::not_empty(Column::ImageUrl))
        .filter(Filter::any([
            Filter::eq(Column::IsMain, false),
            Filter::eq(Column::IsResolved, true),
        ]))
}

async fn seeded() -> MemoryStorage {
    let storage = MemoryStorage::new();
    for id in ["p-1", "p-2"] {
        storage.insert_project(&create_test_project(id)).await.unwrap();
    }
    for n in 1..=4 {
        storage.insert_page(&create_test_page(&format!("pg-{n}"), "p-1", n)).await.unwrap();
    }
    storage.insert_page(&create_test_page("pg-other", "p-2", 1)).await.unwrap();
    let characters = [
        create_test_character("c-main-unresolved", "p-1", Some("a.png"), true, false),
        create_test_character("c-main-resolved", "p-1", Some("b.png"), true, true),
        create_test_character("c-side", "p-1", Some("c.png"), false, false),
        create_test_character("c-side-blank", "p-1", Some(""), false, false),
        create_test_character("c-side-none", "p-1", None, false, true),
        create_test_character("c-foreign", "p-2", Some("d.png"), false, false),
    ];
    for character in &characters {
        storage.insert_character(character).await.unwrap();
    }
    storage
}

#[tokio::test]
async fn counts_are_scoped_to_project() {
    let storage = seeded().await;
    let pages = CountQuery::new(Relation::Pages, project_id("p-1"));
    let characters = CountQuery::new(Relation::Characters, project_id("p-1"));
    assert_eq!(storage.count(&pages).await.unwrap(), Some(4));
    assert_eq!(storage.count(&characters).await.unwrap(), Some(5));
}

#[tokio::test]
async fn image_predicate_skips_blank_and_unresolved_main() {
    let storage = seeded().await;
    // c-main-resolved and c-side qualify
    assert_eq!(storage.count(&illustrated("p-1")).await.unwrap(), Some(2));
}

#[tokio::test]
async fn unknown_project_counts_zero() {
    let storage = seeded().await;
    assert_eq!(storage.count(&illustrated("missing")).await.unwrap(), Some(0));
}

#[tokio::test]
async fn text_equality_filter() {
    let storage = seeded().await;
    let query = CountQuery::new(Relation::Characters, project_id("p-1"))
        .filter(Filter::eq(Column::ImageUrl, "c.png"));
    assert_eq!(storage.count(&query).await.unwrap(), Some(1));
}

#[tokio::test]
async fn invalid_column_is_rejected() {
    let storage = seeded().await;
    let query = CountQuery::new(Relation::Pages, project_id("p-1"))
        .filter(Filter::eq(Column::IsResolved, true));
    let err = storage.count(&query).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidQuery(_)));
}
