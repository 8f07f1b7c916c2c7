use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::campaigns::{AverageEngagementResponse, ErrorResponse, UploadCampaignResponse};
use crate::forms::upload::UploadCampaignForm;
use crate::repository::MemoryRepository;
use crate::services::ServiceError;
use crate::services::campaigns::{
    campaign_analytics as campaign_analytics_service,
    campaign_average_engagement as campaign_average_engagement_service,
    show_campaign as show_campaign_service, show_campaigns as show_campaigns_service,
    upload_campaign as upload_campaign_service,
};

const CAMPAIGN_NOT_FOUND: &str = "Campaign not found";

#[post("/campaigns")]
pub async fn upload_campaign(
    repo: web::Data<MemoryRepository>,
    MultipartForm(mut form): MultipartForm<UploadCampaignForm>,
) -> impl Responder {
    match upload_campaign_service(&mut form, repo.get_ref()) {
        Ok(campaign) => HttpResponse::Created().json(UploadCampaignResponse {
            message: "Campaign uploaded successfully".to_string(),
            campaign,
        }),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        Err(err) => {
            log::error!("Failed to upload campaign: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}

#[get("/campaigns")]
pub async fn show_campaigns(repo: web::Data<MemoryRepository>) -> impl Responder {
    match show_campaigns_service(repo.get_ref()) {
        Ok(campaigns) => HttpResponse::Ok().json(campaigns),
        Err(err) => {
            log::error!("Failed to list campaigns: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}

#[get("/campaigns/{campaign_id}")]
pub async fn show_campaign(
    campaign_id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match show_campaign_service(campaign_id.into_inner(), repo.get_ref()) {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new(CAMPAIGN_NOT_FOUND))
        }
        Err(err) => {
            log::error!("Failed to get campaign: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}

#[get("/campaigns/{campaign_id}/average-engagement-rate")]
pub async fn campaign_average_engagement(
    campaign_id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match campaign_average_engagement_service(campaign_id.into_inner(), repo.get_ref()) {
        Ok(average_engagement_rate) => HttpResponse::Ok().json(AverageEngagementResponse {
            average_engagement_rate,
        }),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new(CAMPAIGN_NOT_FOUND))
        }
        Err(err) => {
            log::error!("Failed to compute average engagement: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}

#[get("/campaigns/{campaign_id}/analytics")]
pub async fn campaign_analytics(
    campaign_id: web::Path<i32>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match campaign_analytics_service(campaign_id.into_inner(), repo.get_ref()) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new(CAMPAIGN_NOT_FOUND))
        }
        Err(err) => {
            log::error!("Failed to compute analytics: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}
