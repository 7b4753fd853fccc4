// src/lib.rs

//! Asynchronous, reactive client bindings for the Citrine in-memory
//! data-structure store.
//!
//! This crate speaks no wire protocol of its own. Commands are built as
//! typed values, encoded into the literal argument tokens the server
//! expects, and handed to a [`driver::Driver`] that owns the connection.
//! Decoded replies come back as [`driver::Reply`] values and are shaped
//! into typed results by the [`client::Client`] facade.
//!
//! The major components are:
//!
//! * `core::range`: boundary types for score, lexicographical, and rank
//!   ranges, and their encoding into the server's range-query grammar.
//! * `core::commands`: one value type per supported command, grouped by
//!   family (strings, key space, sorted sets).
//! * `driver`: the boundary contract with the underlying wire driver.
//! * `client`: the asynchronous facade, including streaming dispatch.

pub mod client;
pub mod config;
pub mod core;
pub mod driver;

pub use crate::client::{Client, CommandResponse};
pub use crate::config::ClientConfig;
pub use crate::core::CitrineError;
pub use crate::driver::{Driver, Reply};
