use serde::Deserialize;

use crate::domain::{MarketSnapshot, PredictionBundle};

/// Body of `POST /api/predict`.
///
/// The two halves arrive together so the UI can swap its whole view of the
/// token atomically.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub predictions: PredictionBundle,
    pub current_data: MarketSnapshot,
}

/// One record from `GET /api/history/{token}`. The backend owns this shape;
/// we only count and log these, so every field is optional pass-through.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub predictions: Option<serde_json::Value>,
}

/// Body of `GET /api/health`. Implementation-defined; `status` is the only
/// field we read.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
}
