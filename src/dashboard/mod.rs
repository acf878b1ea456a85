pub mod card;
pub mod pipeline;
pub mod statistics;

pub use pipeline::{QueryPipeline, QueryState};
pub use statistics::StatisticsPanel;
