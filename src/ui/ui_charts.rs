use eframe::egui::{Frame, Margin, Ui, vec2};
use egui_plot::{AxisHints, Bar, BarChart, HPlacement, Line, Plot, PlotPoints};

use crate::domain::ChartPoint;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::format_axis_price;

/// Price area chart over the derived series. Zero rows renders the explicit
/// "no data" placeholder instead of an empty plotting surface.
pub fn render_price_chart(ui: &mut Ui, series: &[ChartPoint]) {
    chart_frame().show(ui, |ui| {
        chart_heading(ui, UI_TEXT.price_chart_heading, series.len());

        if series.is_empty() {
            render_no_data(ui);
            return;
        }

        let points: Vec<[f64; 2]> = series
            .iter()
            .enumerate()
            .map(|(i, point)| [i as f64, point.price])
            .collect();
        let floor = series
            .iter()
            .map(|p| p.price)
            .fold(f64::INFINITY, f64::min);

        Plot::new("price_chart")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![time_axis(series)])
            .custom_y_axes(vec![price_axis()])
            .label_formatter(|_, value| format_axis_price(value.y))
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                let line = Line::new("Price ($)", PlotPoints::new(points))
                    .color(UI_CONFIG.colors.price_series)
                    .width(2.0)
                    .fill(floor as f32);
                plot_ui.line(line);
            });
    });
}

/// Volume bar chart, sharing the HH:MM x-axis with the price chart.
pub fn render_volume_chart(ui: &mut Ui, series: &[ChartPoint]) {
    chart_frame().show(ui, |ui| {
        chart_heading(ui, UI_TEXT.volume_chart_heading, series.len());

        if series.is_empty() {
            render_no_data(ui);
            return;
        }

        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, point)| Bar::new(i as f64, point.volume).width(0.6))
            .collect();

        Plot::new("volume_chart")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![time_axis(series)])
            .custom_y_axes(vec![volume_axis()])
            .label_formatter(|_, value| format!("{:.4}M", value.y))
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                let chart = BarChart::new("Volume (M)", bars).color(UI_CONFIG.colors.volume_series);
                plot_ui.bar_chart(chart);
            });
    });
}

fn chart_heading(ui: &mut Ui, title: &str, rows: usize) {
    ui.horizontal(|ui| {
        ui.label_header(title);
        if rows > 0 {
            ui.label_subdued(format!("Last {} {}", rows, UI_TEXT.chart_rows_suffix));
        }
    });
    ui.add_space(4.0);
}

fn render_no_data(ui: &mut Ui) {
    ui.allocate_ui(vec2(ui.available_width(), UI_CONFIG.chart_height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label_subdued(UI_TEXT.chart_no_data);
        });
    });
}

/// X-axis ticks show the HH:MM label of the sample at each integer position;
/// fractional grid marks stay blank.
fn time_axis(series: &[ChartPoint]) -> AxisHints<'static> {
    let labels: Vec<String> = series.iter().map(|point| point.time.clone()).collect();
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let index = grid_mark.value.round();
        if (grid_mark.value - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        labels
            .get(index as usize)
            .cloned()
            .unwrap_or_default()
    })
}

fn price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format_axis_price(grid_mark.value))
        .placement(HPlacement::Left)
}

fn volume_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format!("{:.2}M", grid_mark.value))
        .placement(HPlacement::Left)
}

fn chart_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.tile_fill)
        .inner_margin(Margin::symmetric(12, 10))
        .corner_radius(8)
}
