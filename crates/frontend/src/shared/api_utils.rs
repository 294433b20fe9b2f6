//! API utilities for frontend-backend communication
//!
//! Resolves where the prediction service lives and how long to wait for it.
//! The host page can override both with meta tags:
//!
//! ```html
//! <meta name="predict-api-base" content="https://leaf.example.org:5000">
//! <meta name="predict-timeout-ms" content="45000">
//! ```

use contracts::domain::a001_leaf_diagnosis::PREDICT_PATH;

/// Port of the prediction service when nothing else is configured
pub const DEFAULT_PREDICT_PORT: u16 = 5000;

/// Used when the page has no window (and therefore no location)
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:5000";

pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// `setTimeout` takes a signed 32-bit delay; larger values fire immediately
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

pub const API_BASE_META: &str = "predict-api-base";
pub const TIMEOUT_META: &str = "predict-timeout-ms";

/// Build-time override, e.g. `PREDICT_API_BASE=https://api.example.org trunk build`
const BUILD_API_BASE: Option<&str> = option_env!("PREDICT_API_BASE");

#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    pub api_base: String,
    pub timeout_ms: u32,
}

impl PredictorConfig {
    /// Read configuration from the current page
    pub fn from_page() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        let meta = |name: &str| document.as_ref().and_then(|d| meta_content(d, name));

        let location = window.as_ref().map(|w| {
            let location = w.location();
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
            let hostname = location
                .hostname()
                .unwrap_or_else(|_| "127.0.0.1".to_string());
            (protocol, hostname)
        });

        let config = Self::resolve(
            meta(API_BASE_META),
            BUILD_API_BASE,
            location,
            meta(TIMEOUT_META),
        );
        log::debug!(
            "Predictor config: base={}, timeout={}ms",
            config.api_base,
            config.timeout_ms
        );
        config
    }

    /// Resolution order for the base URL: meta tag, build env, page location
    /// with the default port, fixed fallback.
    pub fn resolve(
        meta_base: Option<String>,
        build_base: Option<&str>,
        location: Option<(String, String)>,
        meta_timeout: Option<String>,
    ) -> Self {
        let api_base = meta_base
            .or_else(|| non_empty(build_base))
            .or_else(|| {
                location.map(|(protocol, hostname)| {
                    format!("{}//{}:{}", protocol, hostname, DEFAULT_PREDICT_PORT)
                })
            })
            .unwrap_or_else(|| FALLBACK_API_BASE.to_string());

        let timeout_ms = meta_timeout
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0 && *ms <= MAX_TIMEOUT_MS)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            api_base,
            timeout_ms,
        }
    }

    /// Full URL of the prediction endpoint
    pub fn predict_url(&self) -> String {
        api_url(&self.api_base, PREDICT_PATH)
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Join a base URL and a path, tolerating slashes on either side
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// assert_eq!(api_url("http://host:5000/", "/predict"), "http://host:5000/predict");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    non_empty(element.get_attribute("content").as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Option<(String, String)> {
        Some(("https:".to_string(), "leaf.local".to_string()))
    }

    #[test]
    fn test_meta_tag_wins() {
        let config = PredictorConfig::resolve(
            Some("http://meta:8000".to_string()),
            Some("http://build:9000"),
            location(),
            None,
        );
        assert_eq!(config.api_base, "http://meta:8000");
    }

    #[test]
    fn test_build_env_before_location() {
        let config = PredictorConfig::resolve(None, Some("http://build:9000"), location(), None);
        assert_eq!(config.api_base, "http://build:9000");

        let config = PredictorConfig::resolve(None, Some("  "), location(), None);
        assert_eq!(config.api_base, "https://leaf.local:5000");
    }

    #[test]
    fn test_fallback_without_window() {
        let config = PredictorConfig::resolve(None, None, None, None);
        assert_eq!(config, PredictorConfig::default());
        assert_eq!(config.predict_url(), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn test_timeout_parsing() {
        let parse = |raw: &str| {
            PredictorConfig::resolve(None, None, None, Some(raw.to_string())).timeout_ms
        };
        assert_eq!(parse("45000"), 45_000);
        assert_eq!(parse(" 1000 "), 1_000);
        assert_eq!(parse("0"), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse("soon"), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse("2147483647"), MAX_TIMEOUT_MS);
        // Would wrap to a negative delay in setTimeout
        assert_eq!(parse("3000000000"), DEFAULT_TIMEOUT_MS);
        assert!(parse("4294967295") <= i32::MAX as u32);
    }

    #[test]
    fn test_api_url_slashes() {
        assert_eq!(api_url("http://h:5000", "/predict"), "http://h:5000/predict");
        assert_eq!(api_url("http://h:5000/", "/predict"), "http://h:5000/predict");
        assert_eq!(api_url("http://h/api//", "predict"), "http://h/api/predict");
    }
}
