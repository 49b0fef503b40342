//! Dioxus building blocks for the AgriChain dashboard.
//!
//! This crate provides:
//! - `wallet`: Rust wrappers around the injected `window.ethereum` provider
//! - `storage`: `window.localStorage` backend for the state store
//! - `state`: DashboardState with Dioxus Signals and the async wallet and
//!   submission actions
//! - `components`: RSX components (header, stats, weather, lists, forms)

pub mod components;
pub mod state;
pub mod storage;
pub mod wallet;
