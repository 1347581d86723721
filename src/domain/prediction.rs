use serde::Deserialize;
use strum_macros::{Display, EnumIter};

/// One categorical model output with its reported confidence.
///
/// Confidence is a percentage in [0, 100], not a calibrated probability.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub value: String,
    pub confidence: f64,
}

/// The three named predictions returned per request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionBundle {
    pub atr_regime: Prediction,
    pub trend_label: Prediction,
    pub trend_inversion: Prediction,
}

impl PredictionBundle {
    pub fn get(&self, kind: PredictionKind) -> &Prediction {
        match kind {
            PredictionKind::AtrRegime => &self.atr_regime,
            PredictionKind::TrendLabel => &self.trend_label,
            PredictionKind::TrendInversion => &self.trend_inversion,
        }
    }
}

/// Identity of each prediction tile, iterable so the tile row renders from
/// one loop instead of three near-identical blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PredictionKind {
    #[strum(serialize = "ATR Regime")]
    AtrRegime,
    #[strum(serialize = "Trend Label")]
    TrendLabel,
    #[strum(serialize = "Trend Inversion")]
    TrendInversion,
}

impl PredictionKind {
    pub fn subtitle(&self) -> &'static str {
        match self {
            PredictionKind::AtrRegime => "Volatility Analysis",
            PredictionKind::TrendLabel => "Market Direction",
            PredictionKind::TrendInversion => "Reversal Risk",
        }
    }
}

/// Three-way color classification of a categorical prediction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Pure function of the `value` string. Unknown labels fall back to
    /// Neutral rather than erroring, since the label set is owned by the
    /// backend models and may grow.
    pub fn classify(value: &str) -> Self {
        match value {
            "Bullish" | "High Volatility" | "Likely" => Sentiment::Positive,
            "Bearish" | "Low Volatility" | "Unlikely" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn positive_leaning_labels_classify_positive() {
        for label in ["Bullish", "High Volatility", "Likely"] {
            assert_eq!(Sentiment::classify(label), Sentiment::Positive, "{label}");
        }
    }

    #[test]
    fn negative_leaning_labels_classify_negative() {
        for label in ["Bearish", "Low Volatility", "Unlikely"] {
            assert_eq!(Sentiment::classify(label), Sentiment::Negative, "{label}");
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral() {
        for label in ["Sideways", "Neutral", "", "bullish"] {
            assert_eq!(Sentiment::classify(label), Sentiment::Neutral, "{label}");
        }
    }

    #[test]
    fn bundle_lookup_matches_kind_order() {
        let bundle = PredictionBundle {
            atr_regime: Prediction {
                value: "High Volatility".into(),
                confidence: 87.3,
            },
            trend_label: Prediction {
                value: "Bullish".into(),
                confidence: 91.0,
            },
            trend_inversion: Prediction {
                value: "Unlikely".into(),
                confidence: 12.5,
            },
        };

        let values: Vec<&str> = PredictionKind::iter()
            .map(|kind| bundle.get(kind).value.as_str())
            .collect();
        assert_eq!(values, ["High Volatility", "Bullish", "Unlikely"]);
    }

    #[test]
    fn kind_titles_and_subtitles_are_stable() {
        assert_eq!(PredictionKind::AtrRegime.to_string(), "ATR Regime");
        assert_eq!(PredictionKind::TrendInversion.subtitle(), "Reversal Risk");
    }
}
