//! Balanced synthetic person generation.
//!
//! Produces a finite stream of `Person` records whose surname initials are
//! spread as evenly as possible across the 26-letter alphabet: after any
//! number of generated records, no initial has been used more than one time
//! more often than any other.

pub mod loads;
pub mod population;

// Re-export the core types to provide a clean public API.
pub use loads::LetterLoads;
pub use population::BalancedGenerator;
