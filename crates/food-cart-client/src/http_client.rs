//! Reqwest-backed cart service
//!
//! Direct implementation of the `CartService` trait. Owns transport details
//! only: request serialisation, status mapping and JSON decoding.

use crate::client::CartService;
use crate::error::ServiceError;
use crate::types::{
    CartNotification, DiscountResponse, NotifyResponse, WishlistNotification,
};
use async_trait::async_trait;
use food_cart_config::AppConfig;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;

/// HTTP cart service talking to the configured backend
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: Client,
    cart_url: Url,
    wishlist_url: Url,
    discount_url: Url,
}

impl HttpCartService {
    /// Build the service from application config
    ///
    /// # Errors
    ///
    /// Returns an error when an endpoint URL is malformed or the reqwest
    /// client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.bearer_token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                ServiceError::InvalidHeader(format!("auth token rejected: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            cart_url: parse_url(&config.cart_url())?,
            wishlist_url: parse_url(&config.wishlist_url())?,
            discount_url: parse_url(&config.discount_url())?,
        })
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        url: &Url,
        body: &T,
    ) -> Result<NotifyResponse, ServiceError> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(NotifyResponse {
            status: status.as_u16(),
            body: decode_body(&bytes)?,
        })
    }
}

#[async_trait]
impl CartService for HttpCartService {
    async fn notify_cart(
        &self,
        notification: &CartNotification,
    ) -> Result<NotifyResponse, ServiceError> {
        debug!(
            "POST {} cartProduct={} operation={}",
            self.cart_url, notification.cart_product, notification.operation
        );
        self.post_json(&self.cart_url, notification).await
    }

    async fn notify_wishlist(
        &self,
        notification: &WishlistNotification,
    ) -> Result<NotifyResponse, ServiceError> {
        debug!(
            "POST {} wishListProduct={} operation={}",
            self.wishlist_url, notification.wishlist_product, notification.operation
        );
        self.post_json(&self.wishlist_url, notification).await
    }

    async fn lookup_discount(&self, promocode: &str) -> Result<f64, ServiceError> {
        debug!("GET {} promocode={}", self.discount_url, promocode);

        let response = self
            .client
            .get(self.discount_url.clone())
            .query(&[("promocode", promocode)])
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        parse_discount(&bytes)
    }
}

fn parse_url(raw: &str) -> Result<Url, ServiceError> {
    Url::parse(raw).map_err(|e| ServiceError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn decode_body(bytes: &[u8]) -> Result<serde_json::Value, ServiceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(bytes).map_err(ServiceError::decode)
}

fn parse_discount(bytes: &[u8]) -> Result<f64, ServiceError> {
    let decoded: DiscountResponse = serde_json::from_slice(bytes).map_err(ServiceError::decode)?;
    Ok(decoded.promocode.discount)
}
