use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Configuration from punchlist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dates: DateWindowConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning the todo list as a JSON array
    #[serde(default = "default_url")]
    pub url: String,
    /// Sent as the `_limit` query parameter
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            url: default_url(),
            limit: default_limit(),
        }
    }
}

fn default_url() -> String {
    "https://jsonplaceholder.typicode.com/todos".to_string()
}

fn default_limit() -> u32 {
    20
}

/// Window the synthetic creation dates are drawn from, as `YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateWindowConfig {
    #[serde(default = "default_window_start")]
    pub start: String,
    #[serde(default = "default_window_end")]
    pub end: String,
}

impl Default for DateWindowConfig {
    fn default() -> Self {
        DateWindowConfig {
            start: default_window_start(),
            end: default_window_end(),
        }
    }
}

fn default_window_start() -> String {
    "2024-01-01".to_string()
}

fn default_window_end() -> String {
    "2024-07-01".to_string()
}

impl DateWindowConfig {
    /// Parsed `[start, end)` instants. A malformed entry falls back to its
    /// default; an inverted window collapses to `[start, start]`.
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = parse_day(&self.start).unwrap_or_else(|| {
            parse_day(&default_window_start()).expect("default window start parses")
        });
        let end = parse_day(&self.end)
            .unwrap_or_else(|| parse_day(&default_window_end()).expect("default window end parses"));
        if end < start { (start, start) } else { (start, end) }
    }
}

fn parse_day(text: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides as `#RRGGBB` hex strings
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.url, "https://jsonplaceholder.typicode.com/todos");
        assert_eq!(config.api.limit, 20);
        assert_eq!(config.dates.start, "2024-01-01");
        assert_eq!(config.dates.end, "2024-07-01");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_window_parses_defaults() {
        let (start, end) = DateWindowConfig::default().window();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_window_malformed_falls_back() {
        let window = DateWindowConfig {
            start: "soon".into(),
            end: "2024-03-01".into(),
        };
        let (start, end) = window.window();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_window_inverted_collapses() {
        let window = DateWindowConfig {
            start: "2024-06-01".into(),
            end: "2024-01-01".into(),
        };
        let (start, end) = window.window();
        assert_eq!(start, end);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let config: Config = toml::from_str(
            r#"
[api]
limit = 5
"#,
        )
        .unwrap();
        assert_eq!(config.api.limit, 5);
        assert_eq!(config.api.url, "https://jsonplaceholder.typicode.com/todos");
        assert_eq!(config.dates.start, "2024-01-01");
    }
}
