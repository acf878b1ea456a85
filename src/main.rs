mod api;
mod config;
mod dashboard;
mod models;

use api::{ApiClient, FilterField, PropertyApi, PropertyFilters};
use config::Config;
use dashboard::{QueryPipeline, StatisticsPanel};
use models::HealthStatus;
use std::env;
use std::sync::Arc;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Property Dashboard");
    info!("=====================");

    let config = Config::from_env()?;
    info!("Backend: {}", config.api_base_url);

    let api: Arc<dyn PropertyApi> = Arc::new(ApiClient::new(&config)?);

    match api.get_health().await {
        Ok(health) if health.status == HealthStatus::Healthy => {
            info!("✅ Backend healthy (version {})", health.version);
        }
        Ok(health) => {
            warn!("Backend reports unhealthy (version {})", health.version);
            for (service, state) in &health.services {
                if state != "healthy" {
                    warn!("  {}: {}", service, state);
                }
            }
        }
        Err(_) => {
            warn!("Backend unreachable; continuing anyway");
        }
    }

    // Optional positional filters: [rent|sale] [location]
    let args: Vec<String> = env::args().skip(1).collect();
    let mut filters = PropertyFilters::default();
    if let Some(listing_type) = args.first() {
        filters.set(FilterField::ListingType, listing_type);
    }
    if let Some(location) = args.get(1) {
        filters.set(FilterField::Location, location);
    }

    let statistics = StatisticsPanel::new(Arc::clone(&api));
    statistics.refresh().await;
    println!("{}", statistics.render());
    println!();

    let pipeline = QueryPipeline::new(Arc::clone(&api));
    pipeline.refresh(&filters).await;
    println!("{}", pipeline.render(&filters));

    Ok(())
}
