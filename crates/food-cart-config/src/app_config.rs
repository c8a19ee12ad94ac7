//! Application configuration
//!
//! Configuration loaded from `.food-cart.toml`, then overridden by
//! environment variables (a `.env` file is honoured via `dotenvy`).

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`AppConfig::base_url`]
pub const ENV_BASE_URL: &str = "FOOD_CART_BASE_URL";
/// Environment variable overriding [`AppConfig::user_id`]
pub const ENV_USER_ID: &str = "FOOD_CART_USER_ID";
/// Environment variable overriding [`AppConfig::auth_token`]
pub const ENV_AUTH_TOKEN: &str = "FOOD_CART_AUTH_TOKEN";

/// Application configuration loaded from `.food-cart.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the cart/wishlist backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the cart notification endpoint, relative to `base_url`
    #[serde(default = "default_cart_endpoint")]
    pub cart_endpoint: String,

    /// Path of the wishlist notification endpoint, relative to `base_url`
    #[serde(default = "default_wishlist_endpoint")]
    pub wishlist_endpoint: String,

    /// Path of the promo-code discount lookup, relative to `base_url`
    #[serde(default = "default_discount_endpoint")]
    pub discount_endpoint: String,

    /// Acting user sent with every notification
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Bearer token; empty means no Authorization header
    #[serde(default)]
    pub auth_token: String,

    /// Delivery fee restored by a cart reset
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,

    /// Per-request timeout. `None` lets a hung request run indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_cart_endpoint() -> String {
    "api/cart".to_string()
}

fn default_wishlist_endpoint() -> String {
    "api/wishlist".to_string()
}

fn default_discount_endpoint() -> String {
    "api/discount".to_string()
}

fn default_user_id() -> String {
    "634501".to_string()
}

fn default_delivery_fee() -> f64 {
    2.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cart_endpoint: default_cart_endpoint(),
            wishlist_endpoint: default_wishlist_endpoint(),
            discount_endpoint: default_discount_endpoint(),
            user_id: default_user_id(),
            auth_token: String::new(),
            delivery_fee: default_delivery_fee(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, relying on environment variables"),
        }

        let mut config = Self::from_file_or_default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file_or_default() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml_str(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config file content, falling back to defaults when it is not
    /// valid TOML for this struct.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            log::debug!("Overriding base_url from {}", ENV_BASE_URL);
            self.base_url = base_url;
        }
        if let Some(user_id) = lookup(ENV_USER_ID) {
            log::debug!("Overriding user_id from {}", ENV_USER_ID);
            self.user_id = user_id;
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN) {
            self.auth_token = token;
        }
    }

    /// Full URL of the cart notification endpoint
    pub fn cart_url(&self) -> String {
        join_url(&self.base_url, &self.cart_endpoint)
    }

    /// Full URL of the wishlist notification endpoint
    pub fn wishlist_url(&self) -> String {
        join_url(&self.base_url, &self.wishlist_endpoint)
    }

    /// Full URL of the discount lookup endpoint
    pub fn discount_url(&self) -> String {
        join_url(&self.base_url, &self.discount_endpoint)
    }

    /// Bearer token, if one is configured
    pub fn bearer_token(&self) -> Option<&str> {
        let token = self.auth_token.trim();
        (!token.is_empty()).then_some(token)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.user_id, "634501");
        assert_eq!(config.delivery_fee, 2.0);
        assert!(config.auth_token.is_empty());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            base_url = "https://shop.example.com"
            delivery_fee = 3.5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.delivery_fee, 3.5);
        // Other fields should use defaults
        assert_eq!(config.cart_endpoint, "api/cart");
        assert_eq!(config.user_id, "634501");
    }

    #[test]
    fn test_endpoint_urls_join_cleanly() {
        let config = AppConfig::default();
        assert_eq!(config.cart_url(), "http://localhost:3000/api/cart");
        assert_eq!(config.wishlist_url(), "http://localhost:3000/api/wishlist");

        let config = AppConfig {
            base_url: "https://shop.example.com".to_string(),
            discount_endpoint: "/api/promo".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.discount_url(), "https://shop.example.com/api/promo");
    }

    #[test]
    fn test_overrides_replace_values() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://10.0.0.2:8000/"),
            (ENV_USER_ID, "42"),
            (ENV_AUTH_TOKEN, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://10.0.0.2:8000/");
        assert_eq!(config.user_id, "42");
        assert_eq!(config.bearer_token(), Some("secret"));
    }

    #[test]
    fn test_blank_token_means_no_bearer() {
        let config = AppConfig {
            auth_token: "   ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.bearer_token(), None);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str("base_url = [unterminated");
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_toml_str("delivery_fee = \"free\"");
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_toml_str("user_id = \"7\"");
        assert_eq!(config.user_id, "7");
        assert_eq!(config.base_url, AppConfig::default().base_url);
    }
}
