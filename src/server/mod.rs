//! Server-side adapters feeding the planetary calculations.
//!
//! This module loads colonies and static data from the database, fetches market prices from
//! ESI, and wires both into the calculators of [`crate::planetary`]. Configuration comes from
//! environment variables, logging goes through `dioxus_logger`'s tracing integration.

#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod service;
pub mod startup;
