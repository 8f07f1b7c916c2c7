use std::time::Instant;

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer, web};

use campaign_pulse::models::config::ServerConfig;
use campaign_pulse::repository::MemoryRepository;
use campaign_pulse::routes::campaigns::{
    campaign_analytics, campaign_average_engagement, show_campaign, show_campaigns,
    upload_campaign,
};
use campaign_pulse::routes::main::{StartedAt, health};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load()?;
    let repo = MemoryRepository::new();
    let started_at = web::Data::new(StartedAt(Instant::now()));

    log::info!("Starting Campaign Pulse on {}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(repo.clone()))
            .app_data(started_at.clone())
            .service(health)
            .service(upload_campaign)
            .service(show_campaigns)
            .service(show_campaign)
            .service(campaign_average_engagement)
            .service(campaign_analytics)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
