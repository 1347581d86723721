use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub tile_fill: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub neutral: Color32,
    pub accent: Color32,
    pub price_series: Color32,
    pub volume_series: Color32,
    pub error: Color32,
    pub live_dot: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub chart_height: f32,
    pub tile_value_size: f32,
    pub prediction_value_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(113, 113, 122),
        heading: Color32::from_rgb(245, 245, 245),
        subsection_heading: Color32::from_rgb(161, 161, 170),
        central_panel: Color32::from_rgb(9, 9, 11),
        side_panel: Color32::from_rgb(24, 24, 27),
        tile_fill: Color32::from_rgb(24, 24, 27),
        positive: Color32::from_rgb(74, 222, 128),
        negative: Color32::from_rgb(248, 113, 113),
        neutral: Color32::from_rgb(250, 204, 21),
        accent: Color32::from_rgb(192, 132, 252),
        price_series: Color32::from_rgb(139, 92, 246),
        volume_series: Color32::from_rgb(34, 211, 238),
        error: Color32::from_rgb(248, 113, 113),
        live_dot: Color32::from_rgb(34, 197, 94),
    },
    chart_height: 260.0,
    tile_value_size: 24.0,
    prediction_value_size: 28.0,
};

/// Every user-visible string, in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub brand: &'static str,
    pub live_label: &'static str,

    pub input_heading: &'static str,
    pub input_subheading: &'static str,
    pub input_hint: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub quick_select_label: &'static str,
    pub validation_empty: &'static str,
    pub validation_too_short: &'static str,

    pub tile_price: &'static str,
    pub tile_change: &'static str,
    pub tile_volume: &'static str,
    pub tile_liquidity: &'static str,
    pub tiles_placeholder: &'static str,

    pub confidence_label: &'static str,
    pub prediction_placeholder: &'static str,

    pub price_chart_heading: &'static str,
    pub volume_chart_heading: &'static str,
    pub chart_no_data: &'static str,
    pub chart_rows_suffix: &'static str,

    pub status_backend_label: &'static str,
    pub status_analyzing: &'static str,
    pub status_history_suffix: &'static str,
    pub footer: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Signal Scope - Paste. Predict. Profit.",
    brand: "🧠 Signal Scope",
    live_label: "Live",

    input_heading: "Token Analysis",
    input_subheading: "Enter a Solana token address for instant predictions",
    input_hint: "Paste Solana token address...",
    analyze_button: "⚡ Analyze",
    analyzing_button: "Analyzing...",
    quick_select_label: "Quick select:",
    validation_empty: "Please enter a token address",
    validation_too_short: "Invalid Solana address",

    tile_price: "Price",
    tile_change: "24h Change",
    tile_volume: "24h Volume",
    tile_liquidity: "Liquidity",
    tiles_placeholder: "Submit a token address to load market data",

    confidence_label: "Confidence",
    prediction_placeholder: "Awaiting prediction...",

    price_chart_heading: "Price Action (24h)",
    volume_chart_heading: "Volume Analysis (24h)",
    chart_no_data: "No historical data available yet",
    chart_rows_suffix: "hours",

    status_backend_label: "Backend",
    status_analyzing: "Analyzing token...",
    status_history_suffix: "past predictions on record",
    footer: "Powered by Machine Learning  •  Real-time data from the prediction backend",
};
