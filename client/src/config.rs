//! Client configuration.
//!
//! Configuration values are provided by the embedding application, not
//! hardcoded in the flows.

/// Configuration for the HTTP API collaborator.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recipe API (e.g. "<https://recipes.example.com>").
    ///
    /// Endpoint paths from [`crate::constants::endpoints`] are appended to
    /// this value as-is, so it should not end with a slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the recipe API
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
