//! Core domain types for the AgriChain farmer dashboard.
//!
//! Everything here is plain data: profiles, portfolio statistics, weather,
//! activity and notification records, wallet accounts and networks. The
//! state store (`agri-store`) owns instances of these types; the dashboard
//! renders them; the server receives profiles as JSON.
//!
//! [`submission`] defines the wire format of the farmer submission endpoint;
//! with the `api` feature enabled it also provides an HTTP client for it.

pub mod account;
pub mod activity;
pub mod network;
pub mod notification;
pub mod profile;
pub mod record_id;
pub mod stats;
pub mod submission;
pub mod weather;
