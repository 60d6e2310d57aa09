use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public TEDB endpoint.
pub const DEFAULT_BASE_URL: &str = "https://ec.europa.eu/taxation_customs/tedb";

/// Per-request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Days before a cached code list is fetched again.
pub const DEFAULT_CACHE_MAX_AGE_DAYS: u32 = 30;

/// Client configuration.
///
/// ```
/// use std::time::Duration;
/// use tedb::core::TedbConfig;
///
/// let config = TedbConfig::new()
///     .timeout(Duration::from_secs(10))
///     .cache_dir("./tedb_cache")
///     .create_cache_dir(true);
///
/// assert_eq!(
///     config.vat_search_url(),
///     "https://ec.europa.eu/taxation_customs/tedb/rest-api/vatSearch"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TedbConfig {
    base_url: String,
    timeout: Duration,
    cache_dir: Option<PathBuf>,
    create_cache_dir: bool,
    cache_max_age_days: u32,
}

impl Default for TedbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_dir: None,
            create_cache_dir: false,
            cache_max_age_days: DEFAULT_CACHE_MAX_AGE_DAYS,
        }
    }
}

impl TedbConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another TEDB deployment (or a test server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cache downloaded CN code lists under `dir`.
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Create the cache directory on first write if it does not exist.
    pub fn create_cache_dir(mut self, create: bool) -> Self {
        self.create_cache_dir = create;
        self
    }

    pub fn cache_max_age_days(mut self, days: u32) -> Self {
        self.cache_max_age_days = days;
        self
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }

    pub fn creates_cache_dir(&self) -> bool {
        self.create_cache_dir
    }

    pub fn get_cache_max_age_days(&self) -> u32 {
        self.cache_max_age_days
    }

    pub fn vat_search_url(&self) -> String {
        format!("{}/rest-api/vatSearch", self.base_url)
    }

    /// URL of the CN code list for a four-digit heading.
    pub fn code_list_url(&self, heading: &str) -> String {
        format!("{}/codes/CN_CODE/{heading}.json", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = TedbConfig::default();
        assert_eq!(c.get_base_url(), DEFAULT_BASE_URL);
        assert_eq!(c.get_timeout(), Duration::from_secs(60));
        assert!(c.get_cache_dir().is_none());
        assert!(!c.creates_cache_dir());
        assert_eq!(c.get_cache_max_age_days(), 30);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let c = TedbConfig::new().base_url("http://localhost:8080/tedb/");
        assert_eq!(c.vat_search_url(), "http://localhost:8080/tedb/rest-api/vatSearch");
    }

    #[test]
    fn code_list_url() {
        let c = TedbConfig::new();
        assert_eq!(
            c.code_list_url("0402"),
            "https://ec.europa.eu/taxation_customs/tedb/codes/CN_CODE/0402.json"
        );
    }
}
