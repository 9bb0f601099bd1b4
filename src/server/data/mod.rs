//! Data access layer repositories.
//!
//! Colonies are written by an external sync process and static data by an SDE import; both
//! are read-only here. Repositories return raw entity models, conversion into the planetary
//! domain types happens in the service layer.

/// Colony, pin and route repository.
pub mod planetary;
/// Static data repository for schematics and the market taxonomy.
pub mod sde;

#[cfg(test)]
mod tests;
