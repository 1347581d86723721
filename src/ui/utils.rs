use eframe::egui::{Context, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.subsection_heading;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Tile price: `$` plus a fixed six decimals, matching the backend's
/// sub-penny token universe.
pub fn format_price(price: f64) -> String {
    format!("${:.6}", price)
}

/// Signed two-decimal percentage, e.g. `+5.20%` / `-1.25%`.
pub fn format_signed_pct(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Dollar amounts in millions: `$2.50M`. Input is the raw dollar value.
pub fn format_millions(value: f64) -> String {
    format!("${:.2}M", value / crate::config::BACKEND.chart.display_divisor)
}

/// Confidence rendered to one decimal place, e.g. `87.3%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence)
}

/// Axis labels need adaptive precision: two decimals reads fine for BTC but
/// flattens a meme coin's entire range onto one tick.
pub fn format_axis_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}
