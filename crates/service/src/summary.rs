//! Project summary: three concurrent counts folded into one [`CountSummary`].

use storybook_core::{CountSummary, ProjectId};
use storybook_storage::traits::CountStore;
use storybook_storage::{Column, CountQuery, Filter, Relation};

use crate::error::{ServiceError, SummaryQuery};

/// Characters of `project_id` that count towards `has_images`: a non-empty
/// image, and either not a main character or a main character already resolved.
pub fn characters_with_images(project_id: &ProjectId) -> CountQuery {
    CountQuery::new(Relation::Characters, project_id.clone())
        .filter(Filter::not_empty(Column::ImageUrl))
        .filter(Filter::any([
            Filter::eq(Column::IsMain, false),
            Filter::eq(Column::IsResolved, true),
        ]))
}

async fn run_count<S>(
    store: &S,
    query: &CountQuery,
    which: SummaryQuery,
) -> Result<u64, ServiceError>
where
    S: CountStore + ?Sized,
{
    store
        .count(query)
        .await
        .map(|count| count.unwrap_or(0))
        .map_err(|source| ServiceError::CountQuery { query: which, source })
}

/// Compute the summary of one project.
///
/// The page, character and character-image counts run concurrently; the first
/// failure aborts the rest and is returned tagged with the failing count.
pub async fn read_project_summary<S>(
    store: &S,
    project_id: &ProjectId,
) -> Result<CountSummary, ServiceError>
where
    S: CountStore + ?Sized,
{
    let pages = CountQuery::new(Relation::Pages, project_id.clone());
    let characters = CountQuery::new(Relation::Characters, project_id.clone());
    let illustrated = characters_with_images(project_id);

    let (page_count, character_count, image_count) = tokio::try_join!(
        run_count(store, &pages, SummaryQuery::Pages),
        run_count(store, &characters, SummaryQuery::Characters),
        run_count(store, &illustrated, SummaryQuery::CharacterImages),
    )?;

    Ok(CountSummary { page_count, character_count, has_images: image_count > 0 })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use storybook_core::{Character, Page, Project};
    use storybook_storage::traits::{CharacterStore, PageStore, ProjectStore};
    use storybook_storage::{MemoryStorage, StorageError};
    use tokio::sync::Barrier;

    use super::*;

    fn project_id() -> ProjectId {
        ProjectId::parse("book-1").unwrap()
    }

    fn character(id: &str, image_url: &str, is_main: bool) -> Character {
        let now = Utc::now();
        Character {
            id: id.to_owned(),
            project_id: "book-1".to_owned(),
            name: id.to_owned(),
            description: None,
            image_url: Some(image_url.to_owned()),
            is_main,
            is_resolved: false,
            created_at: now,
            updated_at: now,
        }
    }

    async fn five_pages_three_characters() -> MemoryStorage {
        let storage = MemoryStorage::new();
        let now = Utc::now();
        let project = Project {
            id: "book-1".to_owned(),
            title: "The Lantern Fox".to_owned(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        storage.insert_project(&project).await.unwrap();
        for n in 1..=5 {
            let page = Page {
                id: format!("page-{n}"),
                project_id: "book-1".to_owned(),
                page_number: n,
                text: None,
                image_url: None,
                created_at: now,
                updated_at: now,
            };
            storage.insert_page(&page).await.unwrap();
        }
        storage.insert_character(&character("hero", "", true)).await.unwrap();
        storage.insert_character(&character("owl", "owl.png", false)).await.unwrap();
        storage.insert_character(&character("mole", "mole.png", false)).await.unwrap();
        storage
    }

    /// Fails every query matching `fail_on`, delegating the rest.
    struct FailingStore {
        inner: MemoryStorage,
        fail_on: fn(&CountQuery) -> bool,
    }

    #[async_trait]
    impl CountStore for FailingStore {
        async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError> {
            if (self.fail_on)(query) {
                return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
            }
            self.inner.count(query).await
        }
    }

    fn is_plain_character_count(query: &CountQuery) -> bool {
        query.relation == Relation::Characters && query.filters.is_empty()
    }

    #[tokio::test]
    async fn summarizes_pages_characters_and_images() {
        let storage = five_pages_three_characters().await;
        let summary = read_project_summary(&storage, &project_id()).await.unwrap();
        assert_eq!(summary, CountSummary { page_count: 5, character_count: 3, has_images: true });
    }

    #[tokio::test]
    async fn empty_project_has_zero_counts() {
        let storage = MemoryStorage::new();
        let summary = read_project_summary(&storage, &project_id()).await.unwrap();
        assert_eq!(summary, CountSummary { page_count: 0, character_count: 0, has_images: false });
    }

    #[tokio::test]
    async fn unresolved_main_character_image_does_not_count() {
        let storage = MemoryStorage::new();
        storage.insert_character(&character("hero", "hero.png", true)).await.unwrap();
        let summary = read_project_summary(&storage, &project_id()).await.unwrap();
        assert_eq!(summary.character_count, 1);
        assert!(!summary.has_images);

        let mut resolved = character("hero", "hero.png", true);
        resolved.is_resolved = true;
        storage.update_character(&resolved).await.unwrap();
        let summary = read_project_summary(&storage, &project_id()).await.unwrap();
        assert!(summary.has_images);
    }

    #[tokio::test]
    async fn failed_character_count_fails_whole_summary() {
        let store = FailingStore {
            inner: five_pages_three_characters().await,
            fail_on: is_plain_character_count,
        };
        let err = read_project_summary(&store, &project_id()).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::CountQuery { query: SummaryQuery::Characters, .. }),
            "{err:?}"
        );
        assert!(err.to_string().starts_with("character count query failed"));
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let storage = five_pages_three_characters().await;
        let first = read_project_summary(&storage, &project_id()).await.unwrap();
        let second = read_project_summary(&storage, &project_id()).await.unwrap();
        assert_eq!(first, second);
    }

    struct NullStore;

    #[async_trait]
    impl CountStore for NullStore {
        async fn count(&self, _query: &CountQuery) -> Result<Option<u64>, StorageError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn null_counts_read_as_zero() {
        let summary = read_project_summary(&NullStore, &project_id()).await.unwrap();
        assert_eq!(summary, CountSummary::default());
    }

    /// Every count blocks until all three are in flight at once.
    struct RendezvousStore {
        barrier: Barrier,
    }

    #[async_trait]
    impl CountStore for RendezvousStore {
        async fn count(&self, _query: &CountQuery) -> Result<Option<u64>, StorageError> {
            self.barrier.wait().await;
            Ok(Some(1))
        }
    }

    #[tokio::test]
    async fn counts_are_issued_concurrently() {
        let store = RendezvousStore { barrier: Barrier::new(3) };
        let summary = tokio::time::timeout(
            Duration::from_secs(5),
            read_project_summary(&store, &project_id()),
        )
        .await
        .expect("counts ran sequentially")
        .unwrap();
        assert_eq!(summary, CountSummary { page_count: 1, character_count: 1, has_images: true });
    }

    /// Pages and images never answer; the plain character count fails at once.
    struct StalledStore;

    #[async_trait]
    impl CountStore for StalledStore {
        async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError> {
            if is_plain_character_count(query) {
                return Err(StorageError::Database(sqlx::Error::PoolClosed));
            }
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn first_failure_short_circuits_pending_counts() {
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            read_project_summary(&StalledStore, &project_id()),
        )
        .await
        .expect("summary waited on stalled counts");
        assert!(matches!(
            result,
            Err(ServiceError::CountQuery { query: SummaryQuery::Characters, .. })
        ));
    }
}
