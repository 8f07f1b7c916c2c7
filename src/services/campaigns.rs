use log::error;

use crate::domain::analytics::{AnalyticsView, compute_analytics};
use crate::domain::campaign::Campaign;
use crate::domain::types::CampaignId;
use crate::forms::upload::{UploadCampaignForm, normalize_post, parse_upload};
use crate::repository::{CampaignReader, CampaignWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for the campaign upload flow.
///
/// Parses and validates the uploaded CSV, normalizes every row into a typed
/// post and appends the resulting campaign to the store. Validation problems
/// surface as [`ServiceError::Form`] so the HTTP route can remain a thin
/// wrapper; a failed upload never reaches the store.
pub fn upload_campaign<R>(form: &mut UploadCampaignForm, repo: &R) -> ServiceResult<Campaign>
where
    R: CampaignWriter,
{
    let rows = parse_upload(form)?;
    if rows.is_empty() {
        return Err(ServiceError::Form("CSV file is empty".to_string()));
    }

    let posts = rows.iter().map(normalize_post).collect();
    match repo.create_campaign(posts) {
        Ok(campaign) => Ok(campaign),
        Err(e) => {
            error!("Failed to create campaign: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Lists all stored campaigns in upload order.
pub fn show_campaigns<R>(repo: &R) -> ServiceResult<Vec<Campaign>>
where
    R: CampaignReader,
{
    match repo.list_campaigns() {
        Ok(campaigns) => Ok(campaigns),
        Err(e) => {
            error!("Failed to list campaigns: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetches a single campaign, mapping unknown and malformed ids to
/// [`ServiceError::NotFound`].
pub fn show_campaign<R>(campaign_id: i32, repo: &R) -> ServiceResult<Campaign>
where
    R: CampaignReader,
{
    let id = match CampaignId::new(campaign_id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_campaign_by_id(id) {
        Ok(Some(campaign)) => Ok(campaign),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            error!("Failed to get campaign: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// 4-decimal mean engagement rate for a stored campaign.
pub fn campaign_average_engagement<R>(campaign_id: i32, repo: &R) -> ServiceResult<f64>
where
    R: CampaignReader,
{
    Ok(campaign_analytics(campaign_id, repo)?.overall_engagement_rate)
}

/// Full analytics view for a stored campaign, recomputed on every call.
pub fn campaign_analytics<R>(campaign_id: i32, repo: &R) -> ServiceResult<AnalyticsView>
where
    R: CampaignReader,
{
    let campaign = show_campaign(campaign_id, repo)?;
    match compute_analytics(&campaign.posts) {
        Some(view) => Ok(view),
        None => {
            // Unreachable for stored campaigns, which are non-empty by
            // construction.
            error!("Campaign {campaign_id} has no posts");
            Err(ServiceError::Internal)
        }
    }
}
