//! Planetary colony production & logistics model for EVE Online.
//!
//! The crate turns a description of a character's planetary colonies (extractor, factory and
//! storage pins plus the routes between them) into daily production figures valued in ISK, a
//! per-colony health summary, and a storage flow analysis. The [`planetary`] module holds the
//! pure computation; the `server` feature adds the database and ESI adapters that feed it.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;
pub mod planetary;

#[cfg(feature = "server")]
pub mod server;
