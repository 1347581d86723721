use crate::api::client::RequestError;
use crate::api::types::PredictResponse;
use crate::domain::{ChartPoint, MarketSnapshot, PredictionBundle, build_chart_series};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Everything the dashboard knows about one token, swapped in as a unit so
/// the UI never shows new predictions next to a stale chart.
#[derive(Debug, Clone)]
pub struct TokenView {
    pub address: String,
    pub predictions: PredictionBundle,
    pub market: MarketSnapshot,
    pub chart: Vec<ChartPoint>,
}

impl TokenView {
    pub fn from_response(address: String, response: PredictResponse) -> Self {
        if !response.current_data.ohlcv_is_ordered() {
            log::warn!("Backend returned out-of-order OHLCV samples for {}", address);
        }

        let chart = build_chart_series(&response.current_data.ohlcv);
        Self {
            address,
            predictions: response.predictions,
            market: response.current_data,
            chart,
        }
    }
}

/// The submit workflow's phase. Continuously re-enterable; there is no
/// terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Pending { seq: u64 },
    Success { seq: u64 },
    Failed { seq: u64, message: String },
}

/// Events fed into the view-state transition function. Validation failures
/// never appear here: the input panel swallows them before a submit starts.
#[derive(Debug)]
pub enum SubmitEvent {
    Started {
        seq: u64,
    },
    Resolved {
        seq: u64,
        outcome: Result<Box<TokenView>, RequestError>,
    },
}

impl Default for SubmitPhase {
    fn default() -> Self {
        SubmitPhase::Idle
    }
}

/// The whole screen state, evolved only through [`ViewState::apply`].
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: SubmitPhase,
    pub view: Option<TokenView>,
    /// When set, a failed submit also drops the previously loaded data
    /// instead of leaving it on screen.
    clear_on_error: bool,
}

impl ViewState {
    pub fn new(clear_on_error: bool) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            view: None,
            clear_on_error,
        }
    }

    /// The transition function: `(state, event) -> state`.
    ///
    /// A resolution is applied only if its sequence id matches the submit
    /// currently pending; anything else is a leftover from an older submit
    /// and is discarded (last-request-wins by id, not by resolution order).
    pub fn apply(mut self, event: SubmitEvent) -> Self {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_transitions {
            log::info!("[state] {:?} <- {}", self.phase, event_label(&event));
        }

        match event {
            SubmitEvent::Started { seq } => {
                self.phase = SubmitPhase::Pending { seq };
                self
            }
            SubmitEvent::Resolved { seq, outcome } => {
                if self.phase != (SubmitPhase::Pending { seq }) {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_state_transitions {
                        log::info!("[state] discarding stale resolution (seq {})", seq);
                    }
                    return self;
                }

                match outcome {
                    Ok(view) => {
                        // Atomic replacement: predictions, snapshot and chart
                        // land together.
                        self.view = Some(*view);
                        self.phase = SubmitPhase::Success { seq };
                    }
                    Err(error) => {
                        if self.clear_on_error {
                            self.view = None;
                        }
                        self.phase = SubmitPhase::Failed {
                            seq,
                            message: error.to_string(),
                        };
                    }
                }
                self
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SubmitPhase::Pending { .. })
    }

    /// The request-error banner text, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(debug_assertions)]
fn event_label(event: &SubmitEvent) -> String {
    match event {
        SubmitEvent::Started { seq } => format!("Started(seq {})", seq),
        SubmitEvent::Resolved {
            seq,
            outcome: Ok(_),
        } => format!("Resolved(seq {}, ok)", seq),
        SubmitEvent::Resolved {
            seq,
            outcome: Err(e),
        } => format!("Resolved(seq {}, err: {})", seq, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OhlcvBar, Prediction};

    fn sample_view(address: &str, price: f64) -> Box<TokenView> {
        let market = MarketSnapshot {
            price,
            price_change_24h: 5.2,
            volume_24h: 2_500_000.0,
            liquidity: 1_200_000.0,
            ohlcv: vec![OhlcvBar {
                unix_time: 1_700_000_000,
                o: 0.0001,
                h: 0.00013,
                l: 0.00009,
                c: price,
                v: 100_000.0,
            }],
        };
        let predictions = PredictionBundle {
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
        let chart = build_chart_series(&market.ohlcv);
        Box::new(TokenView {
            address: address.to_string(),
            predictions,
            market,
            chart,
        })
    }

    fn failure() -> RequestError {
        RequestError::Unreachable("connection refused".into())
    }

    #[test]
    fn submit_enters_pending() {
        let state = ViewState::new(false).apply(SubmitEvent::Started { seq: 1 });
        assert_eq!(state.phase, SubmitPhase::Pending { seq: 1 });
        assert!(state.is_pending());
        assert!(state.view.is_none());
    }

    #[test]
    fn success_replaces_the_whole_view_atomically() {
        let state = ViewState::new(false)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Ok(sample_view("So1111", 0.000123)),
            });

        assert_eq!(state.phase, SubmitPhase::Success { seq: 1 });
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.market.price, 0.000123);
        assert_eq!(view.chart.len(), 1);
        assert_eq!(view.predictions.trend_label.value, "Bullish");
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_after_success_keeps_prior_data_by_default() {
        let state = ViewState::new(false)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Ok(sample_view("So1111", 0.000123)),
            })
            .apply(SubmitEvent::Started { seq: 2 })
            .apply(SubmitEvent::Resolved {
                seq: 2,
                outcome: Err(failure()),
            });

        assert!(matches!(state.phase, SubmitPhase::Failed { seq: 2, .. }));
        assert!(state.error().is_some());
        // Previous Success data is untouched; only phase changed.
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.market.price, 0.000123);
        assert_eq!(view.chart.len(), 1);
    }

    #[test]
    fn failure_clears_data_when_configured() {
        let state = ViewState::new(true)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Ok(sample_view("So1111", 0.000123)),
            })
            .apply(SubmitEvent::Started { seq: 2 })
            .apply(SubmitEvent::Resolved {
                seq: 2,
                outcome: Err(failure()),
            });

        assert!(state.view.is_none());
        assert!(state.error().is_some());
    }

    #[test]
    fn stale_resolution_is_discarded() {
        // Two overlapping submits; the older one resolves last and must lose.
        let state = ViewState::new(false)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Started { seq: 2 })
            .apply(SubmitEvent::Resolved {
                seq: 2,
                outcome: Ok(sample_view("newer", 0.5)),
            })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Ok(sample_view("older", 0.1)),
            });

        assert_eq!(state.phase, SubmitPhase::Success { seq: 2 });
        assert_eq!(state.view.as_ref().unwrap().address, "newer");
    }

    #[test]
    fn stale_failure_cannot_clobber_a_newer_pending_submit() {
        let state = ViewState::new(false)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Started { seq: 2 })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Err(failure()),
            });

        assert_eq!(state.phase, SubmitPhase::Pending { seq: 2 });
        assert!(state.error().is_none());
    }

    #[test]
    fn workflow_is_reenterable_from_failed() {
        let state = ViewState::new(false)
            .apply(SubmitEvent::Started { seq: 1 })
            .apply(SubmitEvent::Resolved {
                seq: 1,
                outcome: Err(failure()),
            })
            .apply(SubmitEvent::Started { seq: 2 });

        assert_eq!(state.phase, SubmitPhase::Pending { seq: 2 });
    }

    #[test]
    fn empty_ohlcv_yields_empty_chart_series() {
        let response: PredictResponse = serde_json::from_str(
            r#"{
                "predictions": {
                    "atr_regime": {"value": "Normal", "confidence": 50.0},
                    "trend_label": {"value": "Bearish", "confidence": 60.0},
                    "trend_inversion": {"value": "Likely", "confidence": 70.0}
                },
                "current_data": {
                    "price": 1.0, "price_change_24h": 0.0,
                    "volume_24h": 0.0, "liquidity": 0.0, "ohlcv": []
                }
            }"#,
        )
        .unwrap();

        let view = TokenView::from_response("addr".into(), response);
        assert!(view.chart.is_empty());
    }
}
