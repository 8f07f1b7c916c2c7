use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::post::Post;
use crate::domain::types::{CampaignId, TypeConstraintError};

/// One uploaded CSV file's worth of posts.
///
/// Campaigns are immutable after creation and live for the process lifetime;
/// the store only ever appends. Post order matches CSV row order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub posts: Vec<Post>,
    pub created_at: NaiveDateTime,
}

impl Campaign {
    /// Builds a campaign from an ordered, non-empty list of posts.
    pub fn new(
        id: CampaignId,
        posts: Vec<Post>,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        if posts.is_empty() {
            return Err(TypeConstraintError::EmptyCollection("posts"));
        }
        Ok(Self {
            id,
            posts,
            created_at,
        })
    }
}
