//! # Wedding Stationery Storefront
//!
//! Client-local data layer for a wedding-stationery shop: catalog, cart, session, simulated
//! payment, per-user order history and an admin back office. Everything persists through one
//! [`KeyValueStore`](store_framework::KeyValueStore); there is no server.
//!
//! Start from [`lifecycle::Storefront`], which wires every manager together.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod ids;
pub mod keys;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod payment;
pub mod session;
pub mod settings;
pub mod signals;
