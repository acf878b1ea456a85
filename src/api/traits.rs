use crate::api::error::ApiError;
use crate::api::filters::PropertyFilters;
use crate::models::{Health, HealthStatus, Property, PropertyPage, Statistics};
use async_trait::async_trait;

/// Backend operations the dashboard depends on.
///
/// Consumers hold `Arc<dyn PropertyApi>` rather than a concrete client, so
/// tests can swap in a stub and no component reaches for a process-wide
/// instance.
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// Fetch one page of properties matching the given filters.
    async fn get_properties(&self, filters: &PropertyFilters) -> Result<PropertyPage, ApiError>;

    /// Fetch a single property by id. Fails with [`ApiError::NotFound`] when
    /// no such listing exists.
    async fn get_property(&self, id: i64) -> Result<Property, ApiError>;

    /// Fetch the aggregate statistics snapshot.
    async fn get_statistics(&self) -> Result<Statistics, ApiError>;

    /// Fetch the backend health report.
    async fn get_health(&self) -> Result<Health, ApiError>;

    /// Convenience probe that swallows every failure into `false`.
    async fn is_healthy(&self) -> bool {
        matches!(
            self.get_health().await,
            Ok(health) if health.status == HealthStatus::Healthy
        )
    }
}
