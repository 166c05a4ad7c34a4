//! List query state

use serde::{Deserialize, Serialize};

use crate::domain_models::{CloudStorageId, StorageStatus};

/// Filter criteria of a list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudStoragesFilter {
    pub id: Option<CloudStorageId>,
    pub search: Option<String>,
    pub owner: Option<String>,
    pub display_name: Option<String>,
}

/// Filter and pagination criteria of the last issued list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudStoragesQuery {
    /// 1-based page number
    pub page: u32,
    pub id: Option<CloudStorageId>,
    pub search: Option<String>,
    pub owner: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<StorageStatus>,
}

impl Default for CloudStoragesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            id: None,
            search: None,
            owner: None,
            display_name: None,
            status: None,
        }
    }
}

impl CloudStoragesQuery {
    /// Overlay the fields set in `patch`, keeping the rest
    pub fn merged(self, patch: &CloudStoragesQueryPatch) -> Self {
        Self {
            page: patch.page.unwrap_or(self.page),
            id: patch.id.or(self.id),
            search: patch.search.clone().or(self.search),
            owner: patch.owner.clone().or(self.owner),
            display_name: patch.display_name.clone().or(self.display_name),
            status: patch.status.or(self.status),
        }
    }
}

/// Partial query reported along with a loaded list
///
/// Fields left `None` fall back to the defaults of `CloudStoragesQuery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudStoragesQueryPatch {
    pub page: Option<u32>,
    pub id: Option<CloudStorageId>,
    pub search: Option<String>,
    pub owner: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<StorageStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_starts_at_first_page() {
        let query = CloudStoragesQuery::default();
        assert_eq!(query.page, 1);
        assert!(query.search.is_none());
        assert!(query.status.is_none());
    }

    #[test]
    fn test_merged_overlays_only_set_fields() {
        let patch = CloudStoragesQueryPatch {
            page: Some(3),
            search: Some("bucket".to_string()),
            ..Default::default()
        };
        let query = CloudStoragesQuery::default().merged(&patch);
        assert_eq!(query.page, 3);
        assert_eq!(query.search.as_deref(), Some("bucket"));
        assert!(query.owner.is_none());
        assert!(query.id.is_none());
    }

    #[test]
    fn test_empty_patch_keeps_defaults() {
        let query = CloudStoragesQuery::default().merged(&CloudStoragesQueryPatch::default());
        assert_eq!(query, CloudStoragesQuery::default());
    }
}
