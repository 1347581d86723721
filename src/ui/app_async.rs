use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use poll_promise::Promise;

use crate::api::client::{ApiClient, RequestError};
use crate::api::types::HistoryEntry;
use crate::config::BACKEND;
use crate::ui::app::SignalScopeApp;
use crate::ui::app_state::{SubmitEvent, TokenView};

pub(super) struct SubmitOutcome {
    pub(super) seq: u64,
    pub(super) address: String,
    pub(super) result: Result<Box<TokenView>, RequestError>,
    elapsed_time: Duration,
}

impl SubmitOutcome {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

pub(super) struct HistoryOutcome {
    pub(super) address: String,
    pub(super) result: Result<Vec<HistoryEntry>, RequestError>,
}

impl SignalScopeApp {
    /// Kicks off a prediction request for an address that already passed the
    /// input panel's guard. A newer submit supersedes any in-flight one: the
    /// old promise is dropped and its sequence id can no longer win.
    pub(super) fn start_submit(&mut self, address: String) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.state = std::mem::take(&mut self.state).apply(SubmitEvent::Started { seq });

        let client = Arc::clone(&self.client);
        let promise = Promise::spawn_thread("predict_request", move || {
            run_predict_request(client, address, seq)
        });
        self.submit_promise = Some(promise);
    }

    pub(super) fn poll_submit(&mut self, ctx: &egui::Context) {
        let ready = self
            .submit_promise
            .as_ref()
            .map(|promise| promise.ready().is_some())
            .unwrap_or(false);

        if !ready {
            if self.submit_promise.is_some() {
                ctx.request_repaint();
            }
            return;
        }

        let promise = self.submit_promise.take();
        let outcome = match promise.map(|p| p.try_take()) {
            Some(Ok(outcome)) => outcome,
            _ => return,
        };

        let succeeded = outcome.result.is_ok();
        let elapsed = outcome.elapsed_time();
        let address = outcome.address.clone();

        match &outcome.result {
            Ok(_) => {
                if elapsed.as_millis() > 100 {
                    log::info!(
                        "✅ Prediction request completed in {:.2}s",
                        elapsed.as_secs_f32()
                    );
                }
            }
            Err(error) => {
                log::error!("❌ Prediction request failed: {}", error);
            }
        }

        self.state = std::mem::take(&mut self.state).apply(SubmitEvent::Resolved {
            seq: outcome.seq,
            outcome: outcome.result,
        });

        // Best-effort follow-up; its failure never reaches the screen.
        if succeeded {
            self.start_history_fetch(address);
        }
    }

    fn start_history_fetch(&mut self, address: String) {
        let client = Arc::clone(&self.client);
        let promise = Promise::spawn_thread("history_request", move || {
            let result = client.fetch_history(&address, BACKEND.rest.history_limit);
            HistoryOutcome { address, result }
        });
        self.history_promise = Some(promise);
    }

    pub(super) fn poll_history(&mut self) {
        let ready = self
            .history_promise
            .as_ref()
            .map(|promise| promise.ready().is_some())
            .unwrap_or(false);
        if !ready {
            return;
        }

        let promise = self.history_promise.take();
        let outcome = match promise.map(|p| p.try_take()) {
            Some(Ok(outcome)) => outcome,
            _ => return,
        };

        match outcome.result {
            Ok(entries) => {
                log::info!(
                    "🗂 {} historical predictions on record for {}",
                    entries.len(),
                    outcome.address
                );
                self.history_count = Some(entries.len());
            }
            Err(error) => {
                // Swallowed by design: history is decoration, not state.
                log::info!("No historical data yet for {}: {}", outcome.address, error);
                self.history_count = None;
            }
        }
    }

    pub(super) fn is_submitting(&self) -> bool {
        self.submit_promise.is_some()
    }
}

fn run_predict_request(client: Arc<ApiClient>, address: String, seq: u64) -> SubmitOutcome {
    let started = Instant::now();

    let result = client
        .submit_prediction(&address)
        .map(|response| Box::new(TokenView::from_response(address.clone(), response)));

    SubmitOutcome {
        seq,
        address,
        result,
        elapsed_time: started.elapsed(),
    }
}
