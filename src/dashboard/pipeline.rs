use crate::api::{PropertyApi, PropertyFilters};
use crate::dashboard::card::{empty_state_message, render_card, summary_line};
use crate::models::PropertyPage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// User-facing message for a failed property query. The technical cause goes
/// to the log, never to the screen.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load properties. Please try again later.";

/// Lifecycle of the current property query.
#[derive(Debug, Clone)]
pub enum QueryState {
    /// No query has been issued yet.
    Idle,
    /// A request is in flight; any previous error has been cleared.
    Loading,
    /// The last request succeeded and this page is on display.
    Ready(PropertyPage),
    /// The last request failed; no grid is shown until a retry succeeds.
    Failed(String),
}

/// Turns filter changes into rendered result pages.
///
/// Each refresh takes a ticket from a monotonically increasing sequence and
/// only the completion holding the newest ticket may write the outcome, so a
/// slow stale response can never overwrite the result of a later filter
/// change.
pub struct QueryPipeline {
    api: Arc<dyn PropertyApi>,
    state: Mutex<QueryState>,
    seq: AtomicU64,
}

impl QueryPipeline {
    pub fn new(api: Arc<dyn PropertyApi>) -> Self {
        Self {
            api,
            state: Mutex::new(QueryState::Idle),
            seq: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> QueryState {
        self.state.lock().expect("query state poisoned").clone()
    }

    /// Re-issue the property query for the given filters.
    ///
    /// Called on every filter change and for manual retry after a failure;
    /// both walk the same Loading -> Ready|Failed path.
    pub async fn refresh(&self, filters: &PropertyFilters) {
        // Ticket issuance and the Loading store must be one critical section:
        // split apart, a preempted refresh could stamp Loading over a newer
        // request's finished page and leave the spinner up with nothing in
        // flight.
        let ticket = {
            let mut state = self.state.lock().expect("query state poisoned");
            let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            *state = QueryState::Loading;
            ticket
        };

        let outcome = self.api.get_properties(filters).await;

        let mut state = self.state.lock().expect("query state poisoned");
        if ticket != self.seq.load(Ordering::SeqCst) {
            debug!(ticket, "dropping stale property query response");
            return;
        }
        *state = match outcome {
            Ok(page) => QueryState::Ready(page),
            Err(err) => {
                warn!(%err, "property query failed");
                QueryState::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// Render the pipeline's current state as a text block.
    ///
    /// While loading only the spinner line shows; on failure the message and
    /// a retry hint replace the grid entirely; an empty page gets the
    /// empty-state copy keyed on the active listing-type filter.
    pub fn render(&self, filters: &PropertyFilters) -> String {
        match self.state() {
            QueryState::Idle => "No properties loaded yet.".to_string(),
            QueryState::Loading => "⏳ Loading properties...".to_string(),
            QueryState::Failed(message) => {
                format!("{message}\nRun the query again to retry.")
            }
            QueryState::Ready(page) => {
                if page.properties.is_empty() {
                    return empty_state_message(filters.listing_type);
                }
                let mut out = vec![summary_line(page.properties.len(), page.total_count)];
                out.push(String::new());
                for (i, property) in page.properties.iter().enumerate() {
                    out.push(format!("{}. {}", i + 1, render_card(property)));
                    out.push(String::new());
                }
                out.join("\n")
            }
        }
    }
}
