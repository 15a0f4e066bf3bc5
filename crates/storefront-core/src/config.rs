//! Upstream API configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the product API upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base origin for the product API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the cookie carrying the bearer credential.
    #[serde(default = "default_credential_cookie")]
    pub credential_cookie: String,
}

fn default_base_url() -> String {
    "https://apis.ccbp.in".to_string()
}

fn default_credential_cookie() -> String {
    "jwt_token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            credential_cookie: default_credential_cookie(),
        }
    }
}

impl ApiConfig {
    /// Endpoint for one product's detail payload.
    pub fn product_url(&self, product_id: &str) -> String {
        format!(
            "{}/products/{}",
            self.base_url.trim_end_matches('/'),
            product_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://apis.ccbp.in");
        assert_eq!(config.credential_cookie, "jwt_token");
    }

    #[test]
    fn test_product_url() {
        let config = ApiConfig::default();
        assert_eq!(config.product_url("7"), "https://apis.ccbp.in/products/7");
    }

    #[test]
    fn test_product_url_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.product_url("1"), "http://localhost:9000/products/1");
    }
}
