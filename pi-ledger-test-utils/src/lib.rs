//! Shared test setup for the planetary production crate.
//!
//! Tests are built in two phases: a [`TestBuilder`] declares tables and mock ESI endpoints,
//! and the resulting [`TestContext`] exposes the in-memory database, the mock server URL and
//! fixture helpers for inserting colonies and static data.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant, fixtures::esi::MockMarketPrice, TestBuilder, TestContext, TestError,
    };
}
