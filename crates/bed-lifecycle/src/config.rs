//! Remote service configuration

/// Where the bed service lives when nothing overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Use `candidate` when it is a non-blank value, else the default.
    pub fn with_override(candidate: Option<&str>) -> Self {
        match candidate.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (which starts with '/')
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://beds.example.org/api/ ");
        assert_eq!(config.url("/beds"), "https://beds.example.org/api/beds");
    }

    #[test]
    fn test_override_falls_back_to_default() {
        assert_eq!(ApiConfig::with_override(None).base_url(), DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::with_override(Some("  ")).base_url(), DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::with_override(Some("http://ward:8080")).base_url(), "http://ward:8080");
    }
}
