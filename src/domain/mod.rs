pub mod chart;
pub mod market;
pub mod prediction;

pub use chart::{ChartPoint, build_chart_series};
pub use market::{MarketSnapshot, OhlcvBar};
pub use prediction::{Prediction, PredictionBundle, PredictionKind, Sentiment};
