//! Fantasy Market API Library
//!
//! This library provides the core functionality of the fantasy-football
//! transfer market: the market catalog, the listing manager, and the
//! atomic trade engine, together with the domain model and the HTTP
//! adapters around them.

pub mod api;
pub mod auth;
pub mod domain;
pub mod infrastructure;
pub mod market;
