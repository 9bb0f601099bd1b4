//! Test fixture modules for database and HTTP mock creation.
//!
//! - `esi` - ESI market price endpoints
//! - `planetary` - Colonies, pins, pin contents and routes
//! - `sde` - Planet schematics, market groups and types

pub mod esi;
pub mod planetary;
pub mod sde;
