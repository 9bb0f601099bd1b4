//! Service layer.
//!
//! Services coordinate the repositories, the static data catalog and the price oracle to
//! answer planetary production questions for a character.

pub mod planetary;
pub mod price;
