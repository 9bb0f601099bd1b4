//! Planetary production & logistics calculations.
//!
//! This module contains the pure computations over colonies already loaded in memory:
//! commodity tier classification, daily production valued in ISK, colony health summaries
//! and storage flow analysis. External data (schematics, market taxonomy, prices) is consumed
//! through the traits in [`catalog`]; the only asynchronous boundary is the batched price
//! lookup.

pub mod catalog;
pub mod cycle;
pub mod flow;
pub mod production;
pub mod status;
pub mod tier;

#[cfg(test)]
mod tests;
