use eframe::egui::{Frame, Key, Margin, ProgressBar, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::{BACKEND, QUICK_TOKENS};
use crate::domain::{MarketSnapshot, PredictionBundle, PredictionKind, Sentiment};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Local guard applied before anything reaches the network layer.
///
/// Returns the trimmed address on success, or the validation message to show
/// inline. The length check is a coarse proxy for a Solana address, not a
/// real format check.
pub fn validate_address(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UI_TEXT.validation_empty);
    }
    if trimmed.len() < BACKEND.address.min_len {
        return Err(UI_TEXT.validation_too_short);
    }
    Ok(trimmed.to_string())
}

#[derive(Debug)]
pub enum AddressInputEvent {
    /// Emitted only when the local guard passed
    Submit(String),
}

/// The address form. Owns its uncommitted text and validation message via
/// mutable borrows into the app, so both survive across frames.
pub struct AddressInputPanel<'a> {
    address: &'a mut String,
    validation: &'a mut Option<String>,
    busy: bool,
}

impl<'a> AddressInputPanel<'a> {
    pub fn new(address: &'a mut String, validation: &'a mut Option<String>, busy: bool) -> Self {
        Self {
            address,
            validation,
            busy,
        }
    }

    fn try_submit(&mut self, events: &mut Vec<AddressInputEvent>) {
        match validate_address(self.address) {
            Ok(address) => {
                *self.validation = None;
                events.push(AddressInputEvent::Submit(address));
            }
            Err(message) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[input] rejected address: {}", message);
                }
                *self.validation = Some(message.to_string());
            }
        }
    }

    fn render_quick_select(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.quick_select_label);
            for token in &QUICK_TOKENS {
                if ui.button(format!("{} {}", token.icon, token.name)).clicked() {
                    *self.address = token.address.to_string();
                    *self.validation = None;

                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("[input] quick-selected {}", token.name);
                    }
                }
            }
        });
    }
}

impl<'a> Panel for AddressInputPanel<'a> {
    type Event = AddressInputEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.input_heading);
        ui.label_subheader(UI_TEXT.input_subheading);
        ui.add_space(8.0);

        let mut submit_requested = false;
        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [ui.available_width() - 120.0, 32.0],
                TextEdit::singleline(self.address).hint_text(UI_TEXT.input_hint),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit_requested = true;
            }

            if self.busy {
                ui.add_enabled_ui(false, |ui| {
                    ui.button(UI_TEXT.analyzing_button);
                });
                ui.spinner();
            } else if ui.button(UI_TEXT.analyze_button).clicked() {
                submit_requested = true;
            }
        });

        if submit_requested && !self.busy {
            self.try_submit(&mut events);
        }

        if let Some(message) = self.validation.as_ref() {
            ui.add_space(4.0);
            ui.label_error(format!("⚠ {}", message));
        }

        ui.add_space(8.0);
        self.render_quick_select(ui);

        events
    }
}

/// The four market-metric tiles. Renders a placeholder row until the first
/// successful submit.
pub fn render_market_tiles(ui: &mut Ui, market: Option<&MarketSnapshot>) {
    let Some(market) = market else {
        ui.label_subdued(UI_TEXT.tiles_placeholder);
        return;
    };

    let change_color = if market.price_change_24h >= 0.0 {
        UI_CONFIG.colors.positive
    } else {
        UI_CONFIG.colors.negative
    };

    let tiles = [
        (
            UI_TEXT.tile_price,
            utils::format_price(market.price),
            UI_CONFIG.colors.accent,
        ),
        (
            UI_TEXT.tile_change,
            utils::format_signed_pct(market.price_change_24h),
            change_color,
        ),
        (
            UI_TEXT.tile_volume,
            utils::format_millions(market.volume_24h),
            UI_CONFIG.colors.volume_series,
        ),
        (
            UI_TEXT.tile_liquidity,
            utils::format_millions(market.liquidity),
            UI_CONFIG.colors.heading,
        ),
    ];

    ui.columns(tiles.len(), |columns| {
        for (column, (label, value, color)) in columns.iter_mut().zip(tiles) {
            tile_frame().show(column, |ui| {
                ui.label_subdued(label);
                ui.label(
                    RichText::new(value)
                        .size(UI_CONFIG.tile_value_size)
                        .strong()
                        .color(color),
                );
            });
        }
    });
}

/// The three prediction tiles. Each degrades to an "awaiting" placeholder
/// when no bundle has arrived yet.
pub fn render_prediction_tiles(ui: &mut Ui, bundle: Option<&PredictionBundle>) {
    let kinds: Vec<PredictionKind> = PredictionKind::iter().collect();

    ui.columns(kinds.len(), |columns| {
        for (column, kind) in columns.iter_mut().zip(kinds) {
            tile_frame().show(column, |ui| {
                ui.label(RichText::new(kind.to_string()).strong());
                ui.label_subdued(kind.subtitle());
                ui.add_space(6.0);

                let Some(bundle) = bundle else {
                    ui.add_space(10.0);
                    ui.label_subdued(UI_TEXT.prediction_placeholder);
                    ui.add_space(10.0);
                    return;
                };

                let prediction = bundle.get(kind);
                let color = match Sentiment::classify(&prediction.value) {
                    Sentiment::Positive => UI_CONFIG.colors.positive,
                    Sentiment::Negative => UI_CONFIG.colors.negative,
                    Sentiment::Neutral => UI_CONFIG.colors.neutral,
                };

                ui.label(
                    RichText::new(&prediction.value)
                        .size(UI_CONFIG.prediction_value_size)
                        .strong()
                        .color(color),
                );
                ui.add_space(6.0);

                ui.metric(
                    UI_TEXT.confidence_label,
                    &utils::format_confidence(prediction.confidence),
                    UI_CONFIG.colors.heading,
                );
                // Bar width is proportional to the confidence percentage
                ui.add(
                    ProgressBar::new((prediction.confidence / 100.0) as f32)
                        .desired_height(6.0)
                        .fill(color),
                );
            });
        }
    });
}

fn tile_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.tile_fill)
        .inner_margin(Margin::symmetric(12, 10))
        .corner_radius(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_addresses_are_rejected() {
        assert_eq!(validate_address(""), Err(UI_TEXT.validation_empty));
        assert_eq!(validate_address("   \t "), Err(UI_TEXT.validation_empty));
    }

    #[test]
    fn short_addresses_are_rejected() {
        assert_eq!(
            validate_address("abc123"),
            Err(UI_TEXT.validation_too_short)
        );
        // 31 chars: one short of the minimum
        let almost = "a".repeat(BACKEND.address.min_len - 1);
        assert_eq!(
            validate_address(&almost),
            Err(UI_TEXT.validation_too_short)
        );
    }

    #[test]
    fn valid_addresses_pass_trimmed() {
        let sol = "So11111111111111111111111111111111111111112";
        assert_eq!(validate_address(sol), Ok(sol.to_string()));
        assert_eq!(
            validate_address(&format!("  {}\n", sol)),
            Ok(sol.to_string())
        );
    }

    #[test]
    fn quick_tokens_all_pass_the_guard() {
        for token in &QUICK_TOKENS {
            assert!(validate_address(token.address).is_ok(), "{}", token.name);
        }
    }
}
