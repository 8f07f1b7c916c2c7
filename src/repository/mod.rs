use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;

use crate::domain::campaign::Campaign;
use crate::domain::post::Post;
use crate::domain::types::CampaignId;

/// Errors surfaced by campaign storage operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
    /// A domain constraint was violated while building the record.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only operations for campaign entities.
pub trait CampaignReader {
    /// List all campaigns in insertion order.
    fn list_campaigns(&self) -> RepositoryResult<Vec<Campaign>>;
    /// Retrieve a campaign by its identifier.
    fn get_campaign_by_id(&self, id: CampaignId) -> RepositoryResult<Option<Campaign>>;
}

/// Write operations for campaign entities.
pub trait CampaignWriter {
    /// Build and append a new campaign from an ordered, non-empty post list,
    /// assigning the next sequential identifier.
    fn create_campaign(&self, posts: Vec<Post>) -> RepositoryResult<Campaign>;
}

/// Append-only in-memory campaign store.
///
/// The inner `Arc` is cheap to clone, allowing the repository to be passed
/// around freely between handlers. Campaigns live for the process lifetime;
/// there is no eviction and no persistence.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    campaigns: Arc<RwLock<Vec<Campaign>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CampaignReader for MemoryRepository {
    fn list_campaigns(&self) -> RepositoryResult<Vec<Campaign>> {
        let campaigns = self
            .campaigns
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(campaigns.clone())
    }

    fn get_campaign_by_id(&self, id: CampaignId) -> RepositoryResult<Option<Campaign>> {
        let campaigns = self
            .campaigns
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(campaigns.iter().find(|campaign| campaign.id == id).cloned())
    }
}

impl CampaignWriter for MemoryRepository {
    fn create_campaign(&self, posts: Vec<Post>) -> RepositoryResult<Campaign> {
        let mut campaigns = self
            .campaigns
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        // Id assignment and append happen under the same write lock so
        // identifiers stay sequential.
        let id = CampaignId::new(campaigns.len() as i32 + 1)?;
        let campaign = Campaign::new(id, posts, Utc::now().naive_utc())?;
        campaigns.push(campaign.clone());
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            engagement_rate: 1.0,
            ..Post::default()
        }
    }

    #[test]
    fn assigns_sequential_ids() {
        let repo = MemoryRepository::new();

        let first = repo.create_campaign(vec![sample_post("a")]).unwrap();
        let second = repo.create_campaign(vec![sample_post("b")]).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn rejects_empty_post_lists() {
        let repo = MemoryRepository::new();
        let err = repo.create_campaign(vec![]).unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));

        let campaigns = repo.list_campaigns().unwrap();
        assert!(campaigns.is_empty());
    }

    #[test]
    fn lists_campaigns_in_insertion_order() {
        let repo = MemoryRepository::new();
        repo.create_campaign(vec![sample_post("a")]).unwrap();
        repo.create_campaign(vec![sample_post("b")]).unwrap();

        let campaigns = repo.list_campaigns().unwrap();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].id, 1);
        assert_eq!(campaigns[1].id, 2);
    }

    #[test]
    fn gets_campaign_by_id() {
        let repo = MemoryRepository::new();
        let created = repo.create_campaign(vec![sample_post("a")]).unwrap();

        let found = repo.get_campaign_by_id(created.id).unwrap();
        assert_eq!(found, Some(created));

        let missing = repo
            .get_campaign_by_id(CampaignId::new(99).unwrap())
            .unwrap();
        assert!(missing.is_none());
    }
}
