use crate::config::BACKEND;
use crate::domain::market::OhlcvBar;
use crate::utils::time_utils;

/// One chart-ready row derived from an OHLCV sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Bucket label, formatted "HH:MM"
    pub time: String,
    /// Close price, pass-through
    pub price: f64,
    /// Base volume scaled to millions
    pub volume: f64,
}

/// Projects the trailing chart window out of an OHLCV sequence.
///
/// Pure derivation: takes at most the last `BACKEND.chart.window` samples in
/// their existing order, keeps the close price and scales volume to millions.
/// An empty input yields an empty series; the chart components own the
/// "no data" placeholder for that case.
pub fn build_chart_series(bars: &[OhlcvBar]) -> Vec<ChartPoint> {
    let start = bars.len().saturating_sub(BACKEND.chart.window);
    bars[start..]
        .iter()
        .map(|bar| ChartPoint {
            time: time_utils::epoch_sec_to_hhmm(bar.unix_time),
            price: bar.c,
            volume: bar.v / BACKEND.chart.display_divisor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64, close: f64, volume: f64) -> OhlcvBar {
        OhlcvBar {
            unix_time: ts,
            o: close * 0.9,
            h: close * 1.1,
            l: close * 0.8,
            c: close,
            v: volume,
        }
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(build_chart_series(&[]).is_empty());
    }

    #[test]
    fn series_length_is_min_of_window_and_input() {
        let short: Vec<OhlcvBar> = (0..5).map(|i| bar(i * 3600, 1.0, 1.0)).collect();
        assert_eq!(build_chart_series(&short).len(), 5);

        let long: Vec<OhlcvBar> = (0..40).map(|i| bar(i * 3600, 1.0, 1.0)).collect();
        assert_eq!(build_chart_series(&long).len(), BACKEND.chart.window);
    }

    #[test]
    fn window_keeps_the_most_recent_samples_in_order() {
        let bars: Vec<OhlcvBar> = (0..30).map(|i| bar(i * 3600, i as f64, 1.0)).collect();
        let series = build_chart_series(&bars);

        // Last 24 of 30 means the first projected close is sample #6
        assert_eq!(series.first().unwrap().price, 6.0);
        assert_eq!(series.last().unwrap().price, 29.0);

        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(prices, sorted);
    }

    #[test]
    fn volume_is_scaled_to_millions_exactly() {
        let series = build_chart_series(&[bar(1_700_000_000, 0.000123, 100_000.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].volume, 0.1);
        assert_eq!(series[0].price, 0.000123);
    }

    #[test]
    fn single_sample_projects_close_volume_and_label() {
        let sample = OhlcvBar {
            unix_time: 1_700_000_000,
            o: 0.0001,
            h: 0.00013,
            l: 0.00009,
            c: 0.000123,
            v: 100_000.0,
        };
        let series = build_chart_series(&[sample]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].price, 0.000123);
        assert_eq!(series[0].time, "22:13");
    }
}
