// ============================================================================
// CART SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un único request: POST /update_item/ con {productId, action}
// ============================================================================

use futures_util::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::models::UpdateRequest;
use crate::utils::constants::{CSRF_HEADER, UPDATE_ITEM_PATH};

/// Error de red o de parseo al actualizar el carrito
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    Serialization(String),
    Network(String),
    Parse(String),
    Reload(String),
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            CartError::Network(msg) => write!(f, "Network error: {}", msg),
            CartError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CartError::Reload(msg) => write!(f, "Reload error: {}", msg),
        }
    }
}

impl std::error::Error for CartError {}

/// Transporte hacia el backend del carrito.
///
/// Devuelve el body JSON de la respuesta sin interpretarlo.
pub trait CartTransport {
    fn post_update(
        &self,
        request: UpdateRequest,
        anti_forgery_token: String,
    ) -> LocalBoxFuture<'static, Result<serde_json::Value, CartError>>;
}

/// Cliente HTTP real (gloo-net / fetch)
#[derive(Clone)]
pub struct CartApiClient {
    url: String,
}

impl CartApiClient {
    pub fn new() -> Self {
        Self {
            url: UPDATE_ITEM_PATH.to_string(),
        }
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// El status no se revisa: cualquier respuesta se intenta parsear como JSON
    pub async fn update_item(
        url: &str,
        request: &UpdateRequest,
        anti_forgery_token: &str,
    ) -> Result<serde_json::Value, CartError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header(CSRF_HEADER, anti_forgery_token)
            .json(request)
            .map_err(|e| CartError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| CartError::Network(e.to_string()))?;

        log::debug!("📡 /update_item/ respondió HTTP {}", response.status());

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CartError::Parse(e.to_string()))
    }
}

impl Default for CartApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CartTransport for CartApiClient {
    fn post_update(
        &self,
        request: UpdateRequest,
        anti_forgery_token: String,
    ) -> LocalBoxFuture<'static, Result<serde_json::Value, CartError>> {
        let url = self.url.clone();
        Box::pin(async move { Self::update_item(&url, &request, &anti_forgery_token).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_targets_update_item() {
        assert_eq!(CartApiClient::default().url, "/update_item/");
        assert_eq!(CartApiClient::with_url("/shop/update_item/").url, "/shop/update_item/");
    }

    #[test]
    fn test_error_display() {
        let err = CartError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
        assert_eq!(
            CartError::Parse("expected value".to_string()).to_string(),
            "Parse error: expected value"
        );
    }
}
