//! Cloud storage model
//!
//! A configured attachment to an external storage backend (bucket or container).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CloudStorageId;

/// A cloud storage record as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStorage {
    pub id: CloudStorageId,

    /// Human readable name shown in listings
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub provider_type: ProviderType,

    /// Bucket or container name on the provider side
    pub resource: String,

    /// Username of the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    pub credentials_type: CredentialsType,

    /// Manifest files registered for this storage
    #[serde(default)]
    pub manifests: Vec<String>,

    /// Last known availability (None until the backend checked it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StorageStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl CloudStorage {
    /// Create a record with the required fields, everything else empty
    pub fn new(
        id: impl Into<CloudStorageId>,
        display_name: impl Into<String>,
        provider_type: ProviderType,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: None,
            provider_type,
            resource: resource.into(),
            owner: None,
            credentials_type: CredentialsType::default(),
            manifests: Vec::new(),
            status: None,
            created_date: None,
            updated_date: None,
        }
    }
}

/// Storage provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderType {
    AwsS3Bucket,
    AzureContainer,
    GoogleCloudStorage,
}

impl ProviderType {
    /// Get the display label for this provider
    pub fn label(&self) -> &str {
        match self {
            Self::AwsS3Bucket => "AWS S3",
            Self::AzureContainer => "Azure Blob Container",
            Self::GoogleCloudStorage => "Google Cloud Storage",
        }
    }
}

/// How the backend authenticates against the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialsType {
    KeySecretKeyPair,
    AccountNameTokenPair,
    KeyFilePath,
    #[default]
    AnonymousAccess,
}

/// Availability of a cloud storage as last checked by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageStatus {
    Available,
    NotFound,
    Forbidden,
}

/// Content listing of a cloud storage (entry names, in backend order)
pub type CloudStorageContent = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": 3,
            "display_name": "datasets",
            "provider_type": "AWS_S3_BUCKET",
            "resource": "my-bucket",
            "credentials_type": "KEY_SECRET_KEY_PAIR"
        }"#;
        let storage: CloudStorage = serde_json::from_str(json).unwrap();
        assert_eq!(storage.id, CloudStorageId::new(3));
        assert_eq!(storage.provider_type, ProviderType::AwsS3Bucket);
        assert_eq!(storage.credentials_type, CredentialsType::KeySecretKeyPair);
        assert!(storage.manifests.is_empty());
        assert!(storage.status.is_none());
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(ProviderType::AzureContainer.label(), "Azure Blob Container");
        assert_eq!(ProviderType::GoogleCloudStorage.label(), "Google Cloud Storage");
    }
}
