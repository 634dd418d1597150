use crate::constants::DEFAULT_API_BASE;

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin `/api`, where the bundled backend mounts its router.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at build time.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/users/u1/instances`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let cfg = ApiConfig::from_url("https://bot.example.com/api/");
        assert_eq!(cfg.base_url(), "https://bot.example.com/api");
        assert_eq!(cfg.url("/users"), "https://bot.example.com/api/users");
        assert_eq!(cfg.url("users"), "https://bot.example.com/api/users");
    }

    #[test]
    fn default_is_same_origin() {
        assert_eq!(ApiConfig::default().url("/users"), "/api/users");
    }
}
