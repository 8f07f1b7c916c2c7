use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body returned by the liveness probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since process start.
    pub uptime: f64,
}
