//! Derived per-project counts returned by the summary and dashboard routes.

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Per-project rollup of page and character counts.
///
/// Derived on every request and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountSummary {
    pub page_count: u64,
    pub character_count: u64,
    pub has_images: bool,
}

/// Dashboard row: a project alongside its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOverview {
    #[serde(flatten)]
    pub project: Project,
    pub summary: CountSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let summary = CountSummary { page_count: 5, character_count: 3, has_images: true };
        let json = serde_json::to_value(summary).unwrap();
        let expected = serde_json::json!({"pageCount": 5, "characterCount": 3, "hasImages": true});
        assert_eq!(json, expected);
    }
}
