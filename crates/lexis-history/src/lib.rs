pub mod export;
mod persist;
pub mod report;
pub mod stats;
pub mod store;

pub use report::{StatisticsReport, WordSummary};
pub use stats::StatsStore;
pub use store::{HistoryStore, RecordOutcome};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;
