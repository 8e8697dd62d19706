//! Error types for convention lookup and table validation.

use thiserror::Error;

/// Error type for palette convention operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConventionError {
    /// The requested convention name is not defined.
    #[error("unknown palette convention {0:?}")]
    Unknown(String),

    /// The table is not a permutation of {0,1,2,3}. A non-bijective table
    /// would merge two palette colors into one packed value.
    #[error("mapping table {table:?} is not a permutation of 0..=3")]
    NotBijective {
        /// The offending table.
        table: [u8; 4],
    },
}
