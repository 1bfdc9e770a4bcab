//! Domain state: the last-fetched product and order snapshots.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    orders::{Order, OrderId},
    products::{Product, ProductId},
};

/// Point-in-time copy of both collections.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Products as of the last product reload.
    pub products: Arc<[Product]>,

    /// Orders as of the last order reload.
    pub orders: Arc<[Order]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            orders: Arc::from(Vec::new()),
        }
    }
}

/// Shared holder of the current [`Snapshot`].
///
/// Collections are replaced wholesale. The lock is only held for the swap or the read, so
/// the last completed reload wins.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Snapshot>>,
}

impl Store {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of both collections.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().clone()
    }

    /// Current product snapshot.
    #[must_use]
    pub fn products(&self) -> Arc<[Product]> {
        Arc::clone(&self.inner.read().products)
    }

    /// Current order snapshot.
    #[must_use]
    pub fn orders(&self) -> Arc<[Order]> {
        Arc::clone(&self.inner.read().orders)
    }

    /// Replace the product snapshot and return it.
    pub fn replace_products(&self, products: Vec<Product>) -> Arc<[Product]> {
        let products: Arc<[Product]> = Arc::from(products);

        self.inner.write().products = Arc::clone(&products);

        products
    }

    /// Replace the order snapshot and return it.
    pub fn replace_orders(&self, orders: Vec<Order>) -> Arc<[Order]> {
        let orders: Arc<[Order]> = Arc::from(orders);

        self.inner.write().orders = Arc::clone(&orders);

        orders
    }

    /// Look up a product in the current snapshot.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.inner
            .read()
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// Look up an order in the current snapshot.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.inner
            .read()
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }
}
