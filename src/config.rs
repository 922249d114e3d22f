//! Client Configuration
//!
//! API origin and log level. Build-time defaults can be overridden per page
//! with `<meta>` tags in `index.html`.

use tracing_subscriber::filter::LevelFilter;

/// Origin used when neither the build nor the page names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:80";

const API_BASE_URL_META: &str = "todo-api-base-url";
const LOG_LEVEL_META: &str = "todo-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl ClientConfig {
    /// Read overrides from the current document.
    pub fn load() -> Self {
        Self::resolve(
            option_env!("TODO_API_BASE_URL"),
            meta_content(API_BASE_URL_META),
            meta_content(LOG_LEVEL_META),
        )
    }

    /// Page value wins over build value, which wins over the default.
    pub fn resolve(
        build_base_url: Option<&str>,
        page_base_url: Option<String>,
        page_log_level: Option<String>,
    ) -> Self {
        let api_base_url = page_base_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| build_base_url.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            log_level: page_log_level
                .as_deref()
                .and_then(parse_level)
                .unwrap_or(LevelFilter::INFO),
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:80");
        assert_eq!(config.log_level, LevelFilter::INFO);
    }

    #[test]
    fn test_page_overrides_build() {
        let config = ClientConfig::resolve(
            Some("http://build:8000"),
            Some("https://todo.example.com/".to_string()),
            Some("DEBUG".to_string()),
        );
        assert_eq!(config.api_base_url, "https://todo.example.com");
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_blank_page_value_is_ignored() {
        let config = ClientConfig::resolve(Some("http://build:8000/"), Some("  ".to_string()), None);
        assert_eq!(config.api_base_url, "http://build:8000");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = ClientConfig::resolve(None, None, Some("loud".to_string()));
        assert_eq!(config.log_level, LevelFilter::INFO);
    }
}
