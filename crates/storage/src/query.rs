//! Count-query model shared by every backend.
//!
//! A [`CountQuery`] counts rows of one relation whose `project_id` equals the
//! given project, narrowed by a conjunction of [`Filter`]s.

use std::fmt;

use storybook_core::ProjectId;

use crate::error::StorageError;

/// Relations that can be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Pages,
    Characters,
}

impl Relation {
    pub fn table(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Characters => "characters",
        }
    }

    pub fn has_column(self, column: Column) -> bool {
        match (self, column) {
            (_, Column::ProjectId | Column::ImageUrl) => true,
            (Self::Characters, Column::IsMain | Column::IsResolved) => true,
            (Self::Pages, Column::IsMain | Column::IsResolved) => false,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// Filterable columns. Names are fixed so they can be spliced into SQL safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ProjectId,
    ImageUrl,
    IsMain,
    IsResolved,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Self::ProjectId => "project_id",
            Self::ImageUrl => "image_url",
            Self::IsMain => "is_main",
            Self::IsResolved => "is_resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Row predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`
    Eq(Column, FilterValue),
    /// `column IS NOT NULL AND column <> ''`
    NotEmpty(Column),
    /// Disjunction; an empty list matches nothing.
    Any(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: Column, value: impl Into<FilterValue>) -> Self {
        Self::Eq(column, value.into())
    }

    pub fn not_empty(column: Column) -> Self {
        Self::NotEmpty(column)
    }

    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Any(filters.into_iter().collect())
    }

    fn columns(&self, out: &mut Vec<Column>) {
        match self {
            Self::Eq(column, _) | Self::NotEmpty(column) => out.push(*column),
            Self::Any(filters) => filters.iter().for_each(|f| f.columns(out)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub relation: Relation,
    pub project_id: ProjectId,
    pub filters: Vec<Filter>,
}

impl CountQuery {
    /// Count every row of `relation` belonging to `project_id`.
    pub fn new(relation: Relation, project_id: ProjectId) -> Self {
        Self { relation, project_id, filters: Vec::new() }
    }

    /// Narrow the query; filters are AND-ed together.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Reject filters on columns the relation does not have.
    pub fn validate(&self) -> Result<(), StorageError> {
        let mut columns = Vec::new();
        self.filters.iter().for_each(|f| f.columns(&mut columns));
        match columns.into_iter().find(|c| !self.relation.has_column(*c)) {
            Some(column) => Err(StorageError::InvalidQuery(format!(
                "{} has no column {}",
                self.relation,
                column.name()
            ))),
            None => Ok(()),
        }
    }
}
