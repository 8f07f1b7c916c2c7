use serde::Serialize;

use crate::domain::campaign::Campaign;

/// Standard JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body returned after a successful campaign upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadCampaignResponse {
    pub message: String,
    pub campaign: Campaign,
}

/// Body returned by the average engagement rate endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageEngagementResponse {
    pub average_engagement_rate: f64,
}
