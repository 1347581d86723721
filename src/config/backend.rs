//! Backend-specific configuration constants and types.

/// Configuration for the prediction REST API client
pub struct RestConfig {
    /// Default base URL when none is supplied on the command line
    pub default_base_url: &'static str,
    /// Request timeout budget (milliseconds) for every call
    pub timeout_ms: u64,
    /// Number of past predictions requested by the history call
    pub history_limit: usize,
}

/// Validation rules applied before anything touches the network
pub struct AddressRules {
    /// Coarse proxy for a Solana address, not a real format check
    pub min_len: usize,
}

/// Chart derivation settings
pub struct ChartConfig {
    /// At most this many trailing OHLCV samples are projected into the charts
    pub window: usize,
    /// Volume and liquidity are displayed in units of this divisor ($ millions)
    pub display_divisor: f64,
}

/// The Master Configuration Struct
pub struct BackendConfig {
    pub rest: RestConfig,
    pub address: AddressRules,
    pub chart: ChartConfig,
}

pub const BACKEND: BackendConfig = BackendConfig {
    rest: RestConfig {
        default_base_url: "http://127.0.0.1:8000",
        // A single attempt with a generous budget; no retries by design
        timeout_ms: 30_000,
        history_limit: 24,
    },
    address: AddressRules { min_len: 32 },
    chart: ChartConfig {
        window: 24,
        display_divisor: 1_000_000.0,
    },
};

/// A well-known token offered as a one-click fill for the address field
pub struct QuickToken {
    pub name: &'static str,
    pub icon: &'static str,
    pub address: &'static str,
}

pub const QUICK_TOKENS: [QuickToken; 3] = [
    QuickToken {
        name: "SOL",
        icon: "◎",
        address: "So11111111111111111111111111111111111111112",
    },
    QuickToken {
        name: "USDC",
        icon: "$",
        address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
    },
    QuickToken {
        name: "BONK",
        icon: "🐕",
        address: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
    },
];
