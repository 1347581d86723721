// Remote prediction service adapter
pub mod client;
pub mod types;

pub use client::{ApiClient, RequestError};
pub use types::{HealthResponse, HistoryEntry, PredictResponse};
