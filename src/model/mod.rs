//! Data models shared by the planetary calculators and their callers.
//!
//! Input models describe colonies and static data ([`colony`], [`schematic`]); output models
//! are the derived, never persisted reports ([`production`], [`status`], [`flow`]). Reports
//! derive `Serialize` so an outer HTTP layer can return them as-is.

pub mod colony;
pub mod flow;
pub mod production;
pub mod schematic;
pub mod status;
pub mod tier;
