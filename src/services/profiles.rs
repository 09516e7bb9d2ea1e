use crate::models::FounderProfile;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading the profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// In-memory store for intake profiles, keyed by founder id
///
/// Entries expire after the configured TTL; an expired or unknown founder
/// reads as `NotFound`.
#[derive(Clone)]
pub struct ProfileStore {
    profiles: moka::future::Cache<String, FounderProfile>,
}

impl ProfileStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let profiles = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { profiles }
    }

    pub async fn put(&self, founder_id: &str, profile: FounderProfile) {
        self.profiles.insert(founder_id.to_string(), profile).await;
        tracing::trace!("Stored profile: {}", founder_id);
    }

    pub async fn get(&self, founder_id: &str) -> Result<FounderProfile, ProfileStoreError> {
        self.profiles
            .get(founder_id)
            .await
            .ok_or_else(|| ProfileStoreError::NotFound(founder_id.to_string()))
    }

    pub async fn remove(&self, founder_id: &str) {
        self.profiles.invalidate(founder_id).await;
    }

    /// Approximate number of stored profiles
    pub fn len(&self) -> u64 {
        self.profiles.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = ProfileStore::new(100, 60);
        let profile = FounderProfile {
            startup_industry: Some("SaaS".to_string()),
            ..Default::default()
        };

        store.put("founder-1", profile.clone()).await;
        assert_eq!(store.get("founder-1").await.unwrap(), profile);

        store.remove("founder-1").await;
        assert!(matches!(
            store.get("founder-1").await,
            Err(ProfileStoreError::NotFound(id)) if id == "founder-1"
        ));
    }

    #[tokio::test]
    async fn test_unknown_founder_not_found() {
        let store = ProfileStore::new(100, 60);
        assert!(store.get("nobody").await.is_err());
    }
}
