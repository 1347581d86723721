use std::fmt;
use std::time::Duration;

use reqwest::blocking::Response;
use serde_json::json;

use crate::api::types::{HealthResponse, HistoryEntry, PredictResponse};
use crate::config::BACKEND;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for calls against the prediction service
#[derive(Debug, Clone)]
pub enum RequestError {
    /// Network failure or timeout before any HTTP status arrived
    Unreachable(String),
    /// Non-2xx status; `detail` carries the server-supplied message when the
    /// body had one, otherwise the generic fallback
    Backend { status: u16, detail: String },
    /// 2xx status but the body did not decode into the expected shape
    BadPayload(String),
}

/// Shown whenever the server did not hand us anything better.
const FALLBACK_DETAIL: &str = "Failed to fetch predictions. Is the backend running?";

impl RequestError {
    /// Builds the error for a non-success status, preferring the JSON
    /// `detail` field the backend attaches to its error responses.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| FALLBACK_DETAIL.to_string());
        RequestError::Backend { status, detail }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Unreachable(_) => write!(f, "{}", FALLBACK_DETAIL),
            RequestError::Backend { detail, .. } => write!(f, "{}", detail),
            RequestError::BadPayload(msg) => write!(f, "Unexpected backend response: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::BadPayload(err.to_string())
        } else {
            RequestError::Unreachable(err.to_string())
        }
    }
}

/// Thin adapter over the prediction service. One base URL, one timeout,
/// three calls. No retry, no backoff, no auth.
///
/// Calls block, so they run on worker threads spawned by the UI layer.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RequestError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(BACKEND.rest.timeout_ms))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/predict` with `{"token_address": ...}`. A single failed
    /// attempt is surfaced immediately to the caller.
    pub fn submit_prediction(&self, address: &str) -> Result<PredictResponse, RequestError> {
        let url = format!("{}/api/predict", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "token_address": address }))
            .send()?;

        Self::decode(response)
    }

    /// `GET /api/history/{token}?limit=N`. Best-effort; callers treat failure
    /// as non-fatal.
    pub fn fetch_history(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>, RequestError> {
        let url = format!("{}/api/history/{}?limit={}", self.base_url, address, limit);
        let response = self.http.get(&url).send()?;

        Self::decode(response)
    }

    /// `GET /api/health`. Not wired into any UI path; used once as a startup
    /// preflight.
    pub fn check_health(&self) -> Result<HealthResponse, RequestError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.http.get(&url).send()?;

        Self::decode(response)
    }

    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RequestError::from_error_body(status.as_u16(), &body));
        }

        let body = response.text()?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_api_responses {
            log::info!("API response ({}): {}", status, body);
        }

        serde_json::from_str(&body).map_err(|e| RequestError::BadPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_detail_is_preferred_for_error_bodies() {
        let err = RequestError::from_error_body(422, r#"{"detail":"Invalid token address"}"#);
        assert_eq!(err.to_string(), "Invalid token address");
        match err {
            RequestError::Backend { status, .. } => assert_eq!(status, 422),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        for body in ["", "not json", r#"{"error":"nope"}"#, r#"{"detail":42}"#] {
            let err = RequestError::from_error_body(500, body);
            assert_eq!(err.to_string(), FALLBACK_DETAIL, "body: {body}");
        }
    }

    #[test]
    fn unreachable_renders_the_generic_message() {
        let err = RequestError::Unreachable("connection refused".into());
        assert_eq!(err.to_string(), FALLBACK_DETAIL);
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:8000//").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
