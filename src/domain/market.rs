use serde::Deserialize;

/// One time-bucketed market sample, exactly as the backend serializes it.
/// Field names are single letters on the wire (`o`, `h`, `l`, `c`, `v`)
/// with a camelCase `unixTime` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OhlcvBar {
    #[serde(rename = "unixTime")]
    pub unix_time: i64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

/// Current market data for the analyzed token.
///
/// Replaced wholesale on every successful submit; the OHLCV sequence is
/// expected time-ordered ascending (backend invariant, not re-sorted here).
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSnapshot {
    pub price: f64,
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
    #[serde(default)]
    pub ohlcv: Vec<OhlcvBar>,
}

impl MarketSnapshot {
    /// True when the OHLCV timestamps are non-decreasing. Used only to warn
    /// about a backend that violates its own ordering contract.
    pub fn ohlcv_is_ordered(&self) -> bool {
        self.ohlcv
            .windows(2)
            .all(|pair| pair[0].unix_time <= pair[1].unix_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64) -> OhlcvBar {
        OhlcvBar {
            unix_time: ts,
            o: 1.0,
            h: 2.0,
            l: 0.5,
            c: 1.5,
            v: 100.0,
        }
    }

    #[test]
    fn snapshot_without_ohlcv_key_deserializes_to_empty_sequence() {
        let json = r#"{"price":0.5,"price_change_24h":-1.2,"volume_24h":10.0,"liquidity":20.0}"#;
        let snapshot: MarketSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.ohlcv.is_empty());
        assert!(snapshot.ohlcv_is_ordered());
    }

    #[test]
    fn ordering_check_flags_out_of_order_samples() {
        let ordered = MarketSnapshot {
            price: 1.0,
            price_change_24h: 0.0,
            volume_24h: 0.0,
            liquidity: 0.0,
            ohlcv: vec![bar(10), bar(20), bar(20), bar(30)],
        };
        assert!(ordered.ohlcv_is_ordered());

        let shuffled = MarketSnapshot {
            ohlcv: vec![bar(30), bar(10)],
            ..ordered
        };
        assert!(!shuffled.ohlcv_is_ordered());
    }
}
