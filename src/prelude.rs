//! Estoque prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    admin::{Admin, AdminError, Refreshed},
    api::{
        ApiClient, ApiError, ApiStatus, HttpTransport, Method, RequestOptions, Transport,
    },
    builder::{DraftRow, OrderDraft, ProductOption, RowId},
    navigation::{Navigator, Section, SectionView},
    notifications::{Confirmation, Notice, NoticeId, NoticeLevel, Notices, Operation, Subject},
    orders::{NewOrder, NewOrderItem, Order, OrderId, OrderItem},
    prices::DisplayLocale,
    products::{
        LOW_STOCK_THRESHOLD, Product, ProductBadge, ProductForm, ProductId, ProductInput,
        StockLevel,
    },
    state::Store,
    validation::ValidationError,
    views::{
        dashboard::DashboardView, orders::OrderDetailsView, orders::OrdersView,
        products::ProductsView, stock::StockView,
    },
};
