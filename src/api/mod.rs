//! Inventory backend API client.
//!
//! [`Transport`] is the seam: one JSON request in, one JSON body out. [`ApiClient`] knows
//! the backend's endpoints and decodes their bodies into domain models.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    orders::{NewOrder, Order, OrderId},
    products::{Product, ProductId, ProductInput},
};

mod errors;
mod transport;

pub use errors::ApiError;
pub use transport::{
    HttpTransport, Method, MockTransport, RequestOptions, Transport, decode_body, merge_headers,
};

/// Products collection endpoint.
pub const PRODUCTS_ENDPOINT: &str = "/produtos/";

/// Orders collection endpoint.
pub const ORDERS_ENDPOINT: &str = "/pedidos/";

/// Backend status payload returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Human readable status message.
    pub message: String,

    /// Status keyword, `"online"` when healthy.
    pub status: String,
}

/// Typed client for the inventory backend.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client on top of a transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails or the body is missing or malformed.
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let body = self.send(endpoint, options).await?.ok_or_else(|| {
            ApiError::Decode(format!("empty response body from {endpoint}"))
        })?;

        serde_json::from_value(body).map_err(ApiError::from)
    }

    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let method = options.method;

        debug!(%method, endpoint, "sending request");

        self.transport
            .request(endpoint, options)
            .await
            .inspect_err(|error| error!(%method, endpoint, %error, "request failed"))
    }

    /// Backend status probe (`GET /`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the backend is unreachable or unhealthy.
    pub async fn status(&self) -> Result<ApiStatus, ApiError> {
        self.request("/", RequestOptions::default()).await
    }

    /// List every product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.request(PRODUCTS_ENDPOINT, RequestOptions::default())
            .await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.request(&product_endpoint(id), RequestOptions::default())
            .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let body = serde_json::to_value(input)?;

        self.request(PRODUCTS_ENDPOINT, RequestOptions::json(Method::Post, body))
            .await
    }

    /// Replace a product's fields.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        let body = serde_json::to_value(input)?;

        self.request(&product_endpoint(id), RequestOptions::json(Method::Put, body))
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.send(&product_endpoint(id), RequestOptions::new(Method::Delete))
            .await
            .map(drop)
    }

    /// List every order with its items.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.request(ORDERS_ENDPOINT, RequestOptions::default())
            .await
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.request(&order_endpoint(id), RequestOptions::default())
            .await
    }

    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let body = serde_json::to_value(order)?;

        self.request(ORDERS_ENDPOINT, RequestOptions::json(Method::Post, body))
            .await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.send(&order_endpoint(id), RequestOptions::new(Method::Delete))
            .await
            .map(drop)
    }
}

/// Endpoint of a single product.
#[must_use]
pub fn product_endpoint(id: ProductId) -> String {
    format!("{PRODUCTS_ENDPOINT}{id}")
}

/// Endpoint of a single order.
#[must_use]
pub fn order_endpoint(id: OrderId) -> String {
    format!("{ORDERS_ENDPOINT}{id}")
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn single_resource_endpoints() {
        assert_eq!(product_endpoint(ProductId(3)), "/produtos/3");
        assert_eq!(order_endpoint(OrderId(7)), "/pedidos/7");
    }

    #[tokio::test]
    async fn list_products_decodes_wire_names() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .with(eq(PRODUCTS_ENDPOINT), eq(RequestOptions::default()))
            .times(1)
            .returning(|_, _| {
                Ok(Some(json!([{
                    "id": 1,
                    "nome": "Widget",
                    "descricao": null,
                    "preco": 5.0,
                    "quantidade_estoque": 3
                }])))
            });

        let products = ApiClient::new(transport).list_products().await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|p| p.name.as_str()), Some("Widget"));
        assert_eq!(products.first().map(|p| p.price), Some(Decimal::new(5, 0)));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_posts_json_body() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .withf(|endpoint, options| {
                endpoint == PRODUCTS_ENDPOINT
                    && options.method == Method::Post
                    && options.body
                        == Some(json!({
                            "nome": "Widget",
                            "descricao": "Blue",
                            "preco": 5.5,
                            "quantidade_estoque": 3
                        }))
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(json!({
                    "id": 9,
                    "nome": "Widget",
                    "descricao": "Blue",
                    "preco": 5.5,
                    "quantidade_estoque": 3
                })))
            });

        let input = ProductInput {
            name: "Widget".to_string(),
            description: Some("Blue".to_string()),
            price: Decimal::new(55, 1),
            quantity: 3,
        };

        let product = ApiClient::new(transport).create_product(&input).await?;

        assert_eq!(product.id, ProductId(9));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_puts_to_the_product() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .withf(|endpoint, options| {
                endpoint == "/produtos/9"
                    && options.method == Method::Put
                    && options.body
                        == Some(json!({
                            "nome": "Widget",
                            "descricao": null,
                            "preco": 6.0,
                            "quantidade_estoque": 12
                        }))
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(json!({
                    "id": 9,
                    "nome": "Widget",
                    "descricao": null,
                    "preco": 6.0,
                    "quantidade_estoque": 12
                })))
            });

        let input = ProductInput {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(6, 0),
            quantity: 12,
        };

        let product = ApiClient::new(transport)
            .update_product(ProductId(9), &input)
            .await?;

        assert_eq!(product.quantity, 12);

        Ok(())
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .with(eq("/produtos/4"), eq(RequestOptions::new(Method::Delete)))
            .times(1)
            .returning(|_, _| Ok(None));

        ApiClient::new(transport)
            .delete_product(ProductId(4))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn missing_body_is_a_decode_error_for_reads() {
        let mut transport = MockTransport::new();

        transport.expect_request().returning(|_, _| Ok(None));

        let result = ApiClient::new(transport).list_orders().await;

        assert!(
            matches!(result, Err(ApiError::Decode(_))),
            "expected decode error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn rejected_requests_surface_status() {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .returning(|_, _| Err(ApiError::Request { status: 500 }));

        let result = ApiClient::new(transport).get_order(OrderId(1)).await;

        assert_eq!(result.err(), Some(ApiError::Request { status: 500 }));
    }

    #[tokio::test]
    async fn status_probe_reads_root() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_request()
            .with(eq("/"), eq(RequestOptions::default()))
            .returning(|_, _| {
                Ok(Some(json!({
                    "message": "API de Gestão de Estoque funcionando!",
                    "status": "online",
                    "docs": "/docs"
                })))
            });

        let status = ApiClient::new(transport).status().await?;

        assert_eq!(status.status, "online");

        Ok(())
    }
}
