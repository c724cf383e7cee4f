//! CountStore implementation for PgStorage.

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use super::PgStorage;
use crate::error::StorageError;
use crate::query::{Column, CountQuery, Filter, FilterValue};
use crate::traits::CountStore;

/// Build `SELECT COUNT(*)` for `query`. Column and table names come from fixed
/// enums; every value is a bound parameter.
fn build_count_query(query: &CountQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM ");
    qb.push(query.relation.table());
    qb.push(" WHERE ");
    qb.push(Column::ProjectId.name());
    qb.push(" = ");
    qb.push_bind(query.project_id.as_str().to_owned());
    for filter in &query.filters {
        qb.push(" AND ");
        push_filter(&mut qb, filter);
    }
    qb
}

fn push_filter(qb: &mut QueryBuilder<'static, Postgres>, filter: &Filter) {
    match filter {
        Filter::Eq(column, value) => {
            qb.push(column.name());
            qb.push(" = ");
            match value {
                FilterValue::Text(text) => qb.push_bind(text.clone()),
                FilterValue::Bool(flag) => qb.push_bind(*flag),
            };
        },
        Filter::NotEmpty(column) => {
            let name = column.name();
            qb.push(format!("({name} IS NOT NULL AND {name} <> '')"));
        },
        Filter::Any(filters) if filters.is_empty() => {
            qb.push("FALSE");
        },
        Filter::Any(filters) => {
            qb.push("(");
            for (i, inner) in filters.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                push_filter(qb, inner);
            }
            qb.push(")");
        },
    }
}

#[async_trait]
impl CountStore for PgStorage {
    async fn count(&self, query: &CountQuery) -> Result<Option<u64>, StorageError> {
        query.validate()?;
        let mut qb = build_count_query(query);
        let count: Option<i64> = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(count.map(|n| u64::try_from(n).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Relation;
    use storybook_core::ProjectId;

    #[test]
    fn page_count_filters_on_project_only() {
        let query = CountQuery::new(Relation::Pages, ProjectId::parse("p-1").unwrap());
        let qb = build_count_query(&query);
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM pages WHERE project_id = $1");
    }

    #[test]
    fn image_count_nests_or_group() {
        let query = CountQuery::new(Relation::Characters, ProjectId::parse("p-1").unwrap())
            .filter(Filter::not_empty(Column::ImageUrl))
            .filter(Filter::any([
                Filter::eq(Column::IsMain, false),
                Filter::eq(Column::IsResolved, true),
            ]));
        let qb = build_count_query(&query);
        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM characters WHERE project_id = $1 \
             AND (image_url IS NOT NULL AND image_url <> '') \
             AND (is_main = $2 OR is_resolved = $3)"
        );
    }

    #[test]
    fn empty_any_matches_nothing() {
        let query = CountQuery::new(Relation::Characters, ProjectId::parse("p-1").unwrap())
            .filter(Filter::Any(Vec::new()));
        let qb = build_count_query(&query);
        assert!(qb.sql().ends_with("AND FALSE"));
    }
}
