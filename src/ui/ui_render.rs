use eframe::egui::{self, Color32, Context, RichText, ScrollArea};

use crate::ui::app::SignalScopeApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_charts::{render_price_chart, render_volume_chart};
use crate::ui::ui_panels::{
    AddressInputEvent, AddressInputPanel, Panel, render_market_tiles, render_prediction_tiles,
};
use crate::ui::utils::spaced_separator;
use crate::utils::time_utils::clock_now;

impl SignalScopeApp {
    /// Brand bar: name on the left, live dot and wall clock on the right.
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_panel")
            .frame(
                egui::Frame::new()
                    .fill(UI_CONFIG.colors.side_panel)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.brand)
                            .size(20.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(clock_now()).monospace());
                        ui.label(
                            RichText::new(UI_TEXT.live_label)
                                .small()
                                .color(UI_CONFIG.colors.live_dot),
                        );
                        ui.label(RichText::new("●").color(UI_CONFIG.colors.live_dot));
                    });
                });
            });
    }

    /// Bottom strip: backend endpoint and health, submit phase, history count.
    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_panel")
            .frame(
                egui::Frame::new()
                    .fill(UI_CONFIG.colors.side_panel)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (health_color, health_mark) = match self.backend_healthy {
                        Some(true) => (UI_CONFIG.colors.live_dot, "●"),
                        Some(false) => (UI_CONFIG.colors.error, "●"),
                        None => (UI_CONFIG.colors.label, "○"),
                    };
                    ui.label(RichText::new(health_mark).small().color(health_color));
                    ui.metric(
                        UI_TEXT.status_backend_label,
                        self.client.base_url(),
                        UI_CONFIG.colors.subsection_heading,
                    );

                    if self.state.is_pending() {
                        ui.separator();
                        ui.spinner();
                        ui.label_subdued(UI_TEXT.status_analyzing);
                    }

                    if let Some(count) = self.history_count {
                        ui.separator();
                        ui.label_subdued(format!("{} {}", count, UI_TEXT.status_history_suffix));
                    }
                });
            });
    }

    /// Main column: address form, error banner, tiles, charts, footer.
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let busy = self.state.is_pending() || self.is_submitting();
                let events = AddressInputPanel::new(
                    &mut self.entered_address,
                    &mut self.validation_error,
                    busy,
                )
                .render(ui);

                for event in events {
                    match event {
                        AddressInputEvent::Submit(address) => self.start_submit(address),
                    }
                }

                if let Some(message) = self.state.error() {
                    ui.add_space(8.0);
                    ui.label_error(format!("⚠ {}", message));
                }

                spaced_separator(ui);

                let view = self.state.view.as_ref();
                if let Some(view) = view {
                    ui.label_subdued(format!("Token: {}", view.address));
                    ui.add_space(4.0);
                }

                render_market_tiles(ui, view.map(|v| &v.market));
                ui.add_space(12.0);
                render_prediction_tiles(ui, view.map(|v| &v.predictions));

                ui.add_space(12.0);
                let chart: &[_] = view.map(|v| v.chart.as_slice()).unwrap_or(&[]);
                render_price_chart(ui, chart);
                ui.add_space(12.0);
                render_volume_chart(ui, chart);

                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.footer)
                            .small()
                            .color(Color32::from_rgb(82, 82, 91)),
                    );
                });
                ui.add_space(8.0);
            });
        });
    }
}
