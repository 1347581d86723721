use std::sync::Arc;
use std::time::Duration;

use eframe::{Frame, egui};
use poll_promise::Promise;

use crate::api::client::ApiClient;
use crate::ui::app_async::{HistoryOutcome, SubmitOutcome};
use crate::ui::app_state::ViewState;
use crate::ui::utils::setup_custom_visuals;

/// Options decided at startup, outside the UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppOptions {
    /// Drop previously loaded data when a submit fails, instead of keeping
    /// the last good screen visible behind the error banner.
    pub clear_on_error: bool,
}

/// One dashboard screen: address form, metric tiles, prediction tiles, two
/// charts. All state lives here for the lifetime of the window; nothing is
/// persisted across runs.
pub struct SignalScopeApp {
    // Input form state (uncommitted text + local validation message)
    pub(super) entered_address: String,
    pub(super) validation_error: Option<String>,

    // The view-state machine driving everything below the form
    pub(super) state: ViewState,

    // In-flight network work, polled each frame
    pub(super) submit_promise: Option<Promise<SubmitOutcome>>,
    pub(super) history_promise: Option<Promise<HistoryOutcome>>,

    // Monotonic id handed to each submit; resolutions carrying an older id
    // are discarded by the state machine
    pub(super) next_seq: u64,

    // Decoration only
    pub(super) history_count: Option<usize>,
    pub(super) backend_healthy: Option<bool>,

    pub(super) client: Arc<ApiClient>,
}

impl SignalScopeApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        client: Arc<ApiClient>,
        options: AppOptions,
        backend_healthy: Option<bool>,
    ) -> Self {
        Self {
            entered_address: String::new(),
            validation_error: None,
            state: ViewState::new(options.clear_on_error),
            submit_promise: None,
            history_promise: None,
            next_seq: 1,
            history_count: None,
            backend_healthy,
            client,
        }
    }
}

impl eframe::App for SignalScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll in-flight requests before rendering so this frame already
        // shows their outcome
        self.poll_submit(ctx);
        self.poll_history();

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // Keep the wall clock moving even when nothing else repaints
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight request so its worker thread result is ignored
        self.submit_promise = None;
        self.history_promise = None;
    }
}
