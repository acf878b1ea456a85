use crate::api::PropertyApi;
use crate::dashboard::card::format_price;
use crate::models::Statistics;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Independently refreshed aggregate statistics view.
///
/// A failed refresh never surfaces to the user: the previous snapshot (or
/// the "not loaded" line, if there never was one) stays on display and the
/// failure goes to the log. At most one refresh runs at a time; overlapping
/// calls return without issuing a second request.
pub struct StatisticsPanel {
    api: Arc<dyn PropertyApi>,
    snapshot: Mutex<Option<Statistics>>,
    in_flight: AtomicBool,
}

impl StatisticsPanel {
    pub fn new(api: Arc<dyn PropertyApi>) -> Self {
        Self {
            api,
            snapshot: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Option<Statistics> {
        self.snapshot.lock().expect("snapshot poisoned").clone()
    }

    pub async fn refresh(&self) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return;
        }
        match self.api.get_statistics().await {
            Ok(statistics) => {
                *self.snapshot.lock().expect("snapshot poisoned") = Some(statistics);
            }
            Err(err) => {
                warn!(%err, "statistics refresh failed, keeping previous snapshot");
            }
        }
        self.in_flight.store(false, Ordering::SeqCst);
    }

    pub fn render(&self) -> String {
        let Some(stats) = self.snapshot() else {
            return "Statistics not loaded.".to_string();
        };

        let mut lines = vec![format!(
            "📊 {} listings ({} rent / {} sale)",
            stats.total_properties, stats.rent_properties, stats.sale_properties
        )];
        if let Some(avg) = stats.average_price_rent {
            lines.push(format!("   Average rent: {}", format_price(Some(avg), None)));
        }
        if let Some(avg) = stats.average_price_sale {
            lines.push(format!("   Average sale: {}", format_price(Some(avg), None)));
        }
        if !stats.properties_by_location.is_empty() {
            lines.push(format!(
                "   By location: {}",
                breakdown(&stats.properties_by_location)
            ));
        }
        if !stats.properties_by_type.is_empty() {
            lines.push(format!("   By type: {}", breakdown(&stats.properties_by_type)));
        }
        if let Some(last_updated) = &stats.last_updated {
            lines.push(format!("   Last updated: {last_updated}"));
        }
        lines.join("\n")
    }
}

/// Stable "name count" listing, largest bucket first.
fn breakdown(counts: &std::collections::HashMap<String, u64>) -> String {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .map(|(name, count)| format!("{name} {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, PropertyFilters};
    use crate::models::{Health, Property, PropertyPage};
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};

    /// Returns a queued outcome per call; `Err` means a failed fetch.
    struct StubApi {
        outcomes: Mutex<VecDeque<Result<Statistics, ()>>>,
    }

    impl StubApi {
        fn new(outcomes: Vec<Result<Statistics, ()>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl PropertyApi for StubApi {
        async fn get_properties(
            &self,
            _filters: &PropertyFilters,
        ) -> Result<PropertyPage, ApiError> {
            unreachable!("not used by statistics tests")
        }

        async fn get_property(&self, _id: i64) -> Result<Property, ApiError> {
            unreachable!("not used by statistics tests")
        }

        async fn get_statistics(&self) -> Result<Statistics, ApiError> {
            match self.outcomes.lock().unwrap().pop_front().expect("no outcome queued") {
                Ok(statistics) => Ok(statistics),
                Err(()) => Err(ApiError::Http {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                    message: None,
                }),
            }
        }

        async fn get_health(&self) -> Result<Health, ApiError> {
            unreachable!("not used by statistics tests")
        }
    }

    fn sample_statistics(total: u64) -> Statistics {
        Statistics {
            total_properties: total,
            rent_properties: total / 2,
            sale_properties: total - total / 2,
            properties_by_location: HashMap::from([
                ("dublin".to_string(), 90),
                ("cork".to_string(), 20),
            ]),
            properties_by_type: HashMap::from([("Apartment".to_string(), 60)]),
            average_price_rent: Some(1850.0),
            average_price_sale: Some(450_000.0),
            last_updated: Some("2024-06-01T10:00:00".to_string()),
        }
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot_on_success() {
        let api = Arc::new(StubApi::new(vec![
            Ok(sample_statistics(100)),
            Ok(sample_statistics(120)),
        ]));
        let panel = StatisticsPanel::new(api);

        panel.refresh().await;
        assert_eq!(panel.snapshot().unwrap().total_properties, 100);

        panel.refresh().await;
        assert_eq!(panel.snapshot().unwrap().total_properties, 120);
    }

    #[tokio::test]
    async fn failure_keeps_previous_snapshot() {
        let api = Arc::new(StubApi::new(vec![Ok(sample_statistics(100)), Err(())]));
        let panel = StatisticsPanel::new(api);

        panel.refresh().await;
        panel.refresh().await;

        assert_eq!(panel.snapshot().unwrap().total_properties, 100);
    }

    #[tokio::test]
    async fn failure_with_no_prior_snapshot_stays_empty() {
        let api = Arc::new(StubApi::new(vec![Err(())]));
        let panel = StatisticsPanel::new(api);

        panel.refresh().await;

        assert!(panel.snapshot().is_none());
        assert_eq!(panel.render(), "Statistics not loaded.");
    }

    #[tokio::test]
    async fn render_formats_counts_and_averages() {
        let api = Arc::new(StubApi::new(vec![Ok(sample_statistics(110))]));
        let panel = StatisticsPanel::new(api);
        panel.refresh().await;

        let rendered = panel.render();
        assert!(rendered.contains("110 listings (55 rent / 55 sale)"));
        assert!(rendered.contains("Average rent: €1,850"));
        assert!(rendered.contains("Average sale: €450,000"));
        assert!(rendered.contains("By location: dublin 90, cork 20"));
        assert!(rendered.contains("Last updated: 2024-06-01T10:00:00"));
    }
}
