//! Estoque
//!
//! Estoque is the core of an inventory and order administration console. It talks to the
//! inventory REST backend, keeps a snapshot of products and orders, and turns them into
//! view models for the dashboard, catalog, order and stock sections.

pub mod admin;
pub mod api;
pub mod builder;
pub mod navigation;
pub mod notifications;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod state;
pub mod validation;
pub mod views;
