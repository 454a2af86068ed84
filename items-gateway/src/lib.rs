//! HTTP API gateway for the items service.
//!
//! Maps `GET/POST /items` and `GET/PUT/DELETE /items/{id}` onto the
//! in-memory [`items_core::ItemStore`], plus a `GET /health` probe.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod logging;
pub mod request_id;
pub mod routes;
