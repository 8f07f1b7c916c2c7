use serde::{Deserialize, Serialize};

/// One row of campaign performance data, normalized to typed fields.
///
/// Numeric fields default to zero when the source column is missing or
/// unparsable; string fields pass through verbatim and default to the empty
/// string. The `id` is unique only within its campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub upload_date: String,
    pub media_type: String,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub saves: i64,
    pub reach: i64,
    pub impressions: i64,
    pub caption_length: i64,
    pub hashtags_count: i64,
    pub followers_gained: i64,
    pub traffic_source: String,
    pub engagement_rate: f64,
    pub content_category: String,
}
