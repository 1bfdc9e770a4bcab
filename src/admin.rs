//! Admin facade: the operations the surfaces invoke.
//!
//! Every mutation is followed by a reload of the affected section and of the dashboard,
//! in that order.

use std::sync::Arc;

use futures::try_join;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    api::{ApiClient, ApiError, ApiStatus, Transport},
    builder::{OrderDraft, ProductOption},
    navigation::{Navigator, Section, SectionView},
    notifications::{Operation, Subject, failure_message},
    orders::{Order, OrderId},
    prices::DisplayLocale,
    products::{Product, ProductForm, ProductId},
    state::Store,
    validation::{ValidationError, parse_quantity},
    views::{
        dashboard::DashboardView, orders::OrderDetailsView, orders::OrdersView,
        products::ProductsView, stock::StockView,
    },
};

/// Failure of an admin operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend does not know the product.
    #[error("product {0} not found")]
    UnknownProduct(ProductId),

    /// The backend does not know the order.
    #[error("order {0} not found")]
    UnknownOrder(OrderId),
}

impl AdminError {
    /// Message shown to the user. Validation errors carry their own message, everything
    /// else is reported by operation and subject only.
    #[must_use]
    pub fn user_message(&self, operation: Operation, subject: Subject) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Api(_) | Self::UnknownProduct(_) | Self::UnknownOrder(_) => {
                failure_message(operation, subject)
            }
        }
    }
}

/// Outcome of a successful mutation, with the reloads that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refreshed {
    /// Success message for the user
    pub message: &'static str,

    /// The affected section, reloaded
    pub section: Result<SectionView, AdminError>,

    /// The dashboard, reloaded
    pub dashboard: Result<DashboardView, AdminError>,
}

/// Entry point for every console operation.
#[derive(Debug, Clone)]
pub struct Admin<T> {
    api: ApiClient<T>,
    store: Store,
    locale: DisplayLocale,
}

impl<T: Transport> Admin<T> {
    /// Create the facade with an empty store.
    #[must_use]
    pub fn new(api: ApiClient<T>, locale: DisplayLocale) -> Self {
        Self {
            api,
            store: Store::new(),
            locale,
        }
    }

    /// The API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// The current snapshots.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Display settings.
    #[must_use]
    pub fn locale(&self) -> &DisplayLocale {
        &self.locale
    }

    /// Refetch and replace the product snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the fetch fails. The snapshot is left untouched.
    pub async fn reload_products(&self) -> Result<Arc<[Product]>, AdminError> {
        let products = self.api.list_products().await?;

        Ok(self.store.replace_products(products))
    }

    /// Refetch and replace the order snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the fetch fails. The snapshot is left untouched.
    pub async fn reload_orders(&self) -> Result<Arc<[Order]>, AdminError> {
        let orders = self.api.list_orders().await?;

        Ok(self.store.replace_orders(orders))
    }

    /// Fetch products and orders concurrently and summarise them. Snapshots are only
    /// replaced when both fetches succeed.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when either fetch fails.
    pub async fn load_dashboard(&self) -> Result<DashboardView, AdminError> {
        let (products, orders) = try_join!(self.api.list_products(), self.api.list_orders())
            .inspect_err(|error| error!(%error, "failed to load dashboard"))?;

        let products = self.store.replace_products(products);
        let orders = self.store.replace_orders(orders);

        Ok(DashboardView::build(&products, &orders, &self.locale))
    }

    /// Reload the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the fetch fails.
    pub async fn load_products(&self) -> Result<ProductsView, AdminError> {
        let products = self.reload_products().await?;

        Ok(ProductsView::build(&products, &self.locale))
    }

    /// Reload the order list.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the fetch fails.
    pub async fn load_orders(&self) -> Result<OrdersView, AdminError> {
        let orders = self.reload_orders().await?;

        Ok(OrdersView::build(&orders, &self.locale))
    }

    /// Reload stock levels.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the fetch fails.
    pub async fn load_stock(&self) -> Result<StockView, AdminError> {
        let products = self.reload_products().await?;

        Ok(StockView::build(&products, &self.locale))
    }

    /// Load any section.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the section's fetch fails.
    pub async fn load_section(&self, section: Section) -> Result<SectionView, AdminError> {
        let view = match section {
            Section::Dashboard => SectionView::Dashboard(self.load_dashboard().await?),
            Section::Products => SectionView::Products(self.load_products().await?),
            Section::Orders => SectionView::Orders(self.load_orders().await?),
            Section::Stock => SectionView::Stock(self.load_stock().await?),
        };

        Ok(view)
    }

    /// Switch the visible section and load it.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the section's fetch fails. The section stays
    /// visible either way.
    pub async fn navigate(
        &self,
        navigator: &mut Navigator,
        section: Section,
    ) -> Result<SectionView, AdminError> {
        navigator.show(section);

        self.load_section(section).await
    }

    async fn refresh(&self, section: Section, message: &'static str) -> Refreshed {
        let section = self.load_section(section).await;
        let dashboard = self.load_dashboard().await;

        Refreshed {
            message,
            section,
            dashboard,
        }
    }

    /// A product from the snapshot, fetched when it is not there.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownProduct`] when the backend does not know the product.
    pub async fn product(&self, id: ProductId) -> Result<Product, AdminError> {
        if let Some(product) = self.store.product(id) {
            return Ok(product);
        }

        self.api
            .get_product(id)
            .await
            .map_err(|error| match error.status() {
                Some(404) => AdminError::UnknownProduct(id),
                _ => AdminError::Api(error),
            })
    }

    /// Create or update a product from form input.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] without a request when the form is invalid, or
    /// [`AdminError::Api`] when the backend rejects the change.
    pub async fn save_product(&self, form: &ProductForm) -> Result<Refreshed, AdminError> {
        let input = form.parse()?;

        let saved = match form.product {
            Some(id) => self.api.update_product(id, &input).await,
            None => self.api.create_product(&input).await,
        }
        .inspect_err(|error| error!(%error, "failed to save product"))?;

        info!(product = %saved.id, "saved product");

        Ok(self
            .refresh(Section::Products, form.success_message())
            .await)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the backend rejects the deletion.
    pub async fn delete_product(&self, id: ProductId) -> Result<Refreshed, AdminError> {
        self.api
            .delete_product(id)
            .await
            .inspect_err(|error| error!(%error, product = %id, "failed to delete product"))?;

        info!(product = %id, "deleted product");

        Ok(self
            .refresh(Section::Products, "Produto excluído com sucesso!")
            .await)
    }

    /// Submit a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] without a request when the draft is incomplete,
    /// or [`AdminError::Api`] when the backend rejects the order.
    pub async fn submit_order(&self, draft: &OrderDraft) -> Result<Refreshed, AdminError> {
        let order = draft.to_new_order()?;

        let created = self
            .api
            .create_order(&order)
            .await
            .inspect_err(|error| error!(%error, "failed to create order"))?;

        info!(order = %created.id, items = created.item_count(), "created order");

        Ok(self
            .refresh(Section::Orders, "Pedido criado com sucesso!")
            .await)
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the backend rejects the deletion.
    pub async fn delete_order(&self, id: OrderId) -> Result<Refreshed, AdminError> {
        self.api
            .delete_order(id)
            .await
            .inspect_err(|error| error!(%error, order = %id, "failed to delete order"))?;

        info!(order = %id, "deleted order");

        Ok(self
            .refresh(Section::Orders, "Pedido excluído com sucesso!")
            .await)
    }

    /// Breakdown of an order, from the snapshot or fetched when it is not there.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownOrder`] when the backend does not know the order.
    pub async fn order_details(&self, id: OrderId) -> Result<OrderDetailsView, AdminError> {
        let order = match self.store.order(id) {
            Some(order) => order,
            None => self
                .api
                .get_order(id)
                .await
                .map_err(|error| match error.status() {
                    Some(404) => AdminError::UnknownOrder(id),
                    _ => AdminError::Api(error),
                })?,
        };

        Ok(OrderDetailsView::build(&order, &self.locale))
    }

    /// Set a product's stock quantity, keeping its other fields.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] without a request when the quantity is not a
    /// non-negative whole number, or [`AdminError::Api`] when the update fails.
    pub async fn adjust_stock(
        &self,
        id: ProductId,
        quantity: &str,
    ) -> Result<Refreshed, AdminError> {
        let quantity = parse_quantity(quantity)?;

        let product = self.product(id).await?;

        self.api
            .update_product(id, &product.with_quantity(quantity))
            .await
            .inspect_err(|error| error!(%error, product = %id, "failed to adjust stock"))?;

        info!(product = %id, from = product.quantity, to = quantity, "adjusted stock");

        Ok(self
            .refresh(Section::Stock, "Estoque atualizado com sucesso!")
            .await)
    }

    /// Options for the order builder's product pickers.
    #[must_use]
    pub fn product_options(&self) -> Vec<ProductOption> {
        self.store
            .products()
            .iter()
            .map(|product| ProductOption::from_product(product, &self.locale))
            .collect()
    }

    /// Backend status probe.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] when the backend is unreachable.
    pub async fn status(&self) -> Result<ApiStatus, AdminError> {
        Ok(self.api.status().await?)
    }
}
