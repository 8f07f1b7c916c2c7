use std::time::Instant;

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::dto::health::HealthResponse;

/// Process start marker used to report uptime.
#[derive(Debug, Clone, Copy)]
pub struct StartedAt(pub Instant);

/// Liveness probe; succeeds whenever the process is up.
#[get("/health")]
pub async fn health(started_at: web::Data<StartedAt>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "Campaign Pulse is running".to_string(),
        timestamp: Utc::now(),
        uptime: started_at.0.elapsed().as_secs_f64(),
    })
}
