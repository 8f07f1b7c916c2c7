//! Aggregate statistics and rankings derived from a campaign's posts.
//!
//! Everything here is a pure function over an ordered post slice. Results are
//! recomputed from scratch on every call; nothing is cached or incrementally
//! updated. Given the same input order the output is fully deterministic:
//! ranking ties keep first-seen row order because the underlying sort is
//! stable, and the best-media-type comparison uses strict `>` so the group
//! encountered first wins equal averages.

use serde::Serialize;

use crate::domain::post::Post;

/// Number of posts reported by each ranking.
pub const TOP_RANKING_SIZE: usize = 5;

/// Derived analytics for one campaign, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub total_followers_gained: i64,
    /// Mean engagement rate, fixed to 4 decimal digits.
    pub overall_engagement_rate: f64,
    /// Ids of the top posts by engagement rate, best first.
    pub top5_engagement: Vec<String>,
    /// Ids of the top posts by share count, best first.
    pub top5_shares: Vec<String>,
    pub best_media_type: String,
    /// Distinct media type values in first-seen order.
    pub media_types: Vec<String>,
}

/// Computes the full analytics view for a non-empty post list.
///
/// Returns `None` for an empty slice; campaigns are non-empty by
/// construction so stored data never hits that branch.
pub fn compute_analytics(posts: &[Post]) -> Option<AnalyticsView> {
    if posts.is_empty() {
        return None;
    }

    let total_followers_gained = posts.iter().map(|p| p.followers_gained).sum();
    let mean =
        posts.iter().map(|p| p.engagement_rate).sum::<f64>() / posts.len() as f64;

    Some(AnalyticsView {
        total_followers_gained,
        overall_engagement_rate: round4(mean),
        top5_engagement: top_ids_by(posts, |p| p.engagement_rate),
        top5_shares: top_ids_by(posts, |p| p.shares as f64),
        best_media_type: best_media_type(posts),
        media_types: distinct_media_types(posts),
    })
}

/// Fixed-point rounding to 4 decimals with ties away from zero,
/// matching `toFixed(4)` semantics.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Ids of the first [`TOP_RANKING_SIZE`] posts after a stable descending
/// sort on `key`. Ties keep original row order.
fn top_ids_by<F>(posts: &[Post], key: F) -> Vec<String>
where
    F: Fn(&Post) -> f64,
{
    let mut ranked: Vec<&Post> = posts.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked
        .iter()
        .take(TOP_RANKING_SIZE)
        .map(|p| p.id.clone())
        .collect()
}

/// Media type whose posts have the strictly highest mean engagement rate.
///
/// Groups are visited in first-seen order, so equal averages resolve to the
/// type appearing first in the input.
fn best_media_type(posts: &[Post]) -> String {
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for post in posts {
        match groups.iter_mut().find(|group| group.0 == post.media_type) {
            Some(group) => {
                group.1 += post.engagement_rate;
                group.2 += 1;
            }
            None => groups.push((post.media_type.clone(), post.engagement_rate, 1)),
        }
    }

    let mut best = &groups[0];
    let mut best_average = best.1 / best.2 as f64;
    for group in groups.iter().skip(1) {
        let average = group.1 / group.2 as f64;
        if average > best_average {
            best = group;
            best_average = average;
        }
    }
    best.0.clone()
}

fn distinct_media_types(posts: &[Post]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for post in posts {
        if !seen.iter().any(|media_type| *media_type == post.media_type) {
            seen.push(post.media_type.clone());
        }
    }
    seen
}
