//! Error types for element records, lookups and queries.
//!
//! Errors are grouped by source: chemistry lookups, record validation,
//! query resolution, and data loading.

use thiserror::Error;

/// Errors produced by the element store, its queries and the chemistry adapter.
#[derive(Debug, Error)]
pub enum Error {
    /// The chemistry data source has no entry for this symbol.
    #[error("no chemistry data for symbol '{0}'")]
    UnknownSymbol(String),

    /// Atomic number outside `1..=118`.
    #[error("atomic number {0} is out of range: the largest atomic number is 118")]
    AtomicNumberOutOfRange(u16),

    /// Group outside `0..=18` (0 meaning "not yet assigned").
    #[error("group {0} is out of range: groups run from 1 to 18")]
    GroupOutOfRange(u16),

    /// Chemical symbols are one to three characters long.
    #[error("invalid chemical symbol '{0}': expected 1 to 3 characters")]
    InvalidSymbol(String),

    /// A group argument that is neither a group number nor a known label.
    #[error("unrecognized group '{0}': expected 1-18 or a label such as '8B'")]
    InvalidGroup(String),

    /// A single-record lookup matched nothing.
    #[error("no element matches {0}")]
    NotFound(String),

    /// A single-record lookup matched more than one record.
    #[error("{count} elements match {query}, expected exactly one")]
    MultipleFound {
        /// Description of the lookup.
        query: String,
        /// Number of matching records.
        count: usize,
    },

    /// A record with this identifier already exists.
    #[error("an element with id {0} already exists")]
    DuplicateId(u32),

    /// Two steps of the group assignment plan claim the same element.
    #[error("group assignment plan assigns atomic number {atomic_number} twice ({first} and {second})")]
    PlanOverlap {
        /// The doubly-claimed atomic number.
        atomic_number: u8,
        /// Group of the earlier step.
        first: u8,
        /// Group of the later step.
        second: u8,
    },

    /// Failed to parse chemistry data TOML.
    #[error("failed to parse chemistry data: {0}")]
    ChemistryParse(#[from] toml::de::Error),

    /// Chemistry data parsed but is not usable.
    #[error("invalid chemistry data for '{symbol}': {detail}")]
    ChemistryData {
        /// Offending symbol.
        symbol: String,
        /// Description of the problem.
        detail: String,
    },

    /// Fixture loading or dumping failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl Error {
    /// Creates a [`ChemistryData`](Error::ChemistryData) error.
    pub fn chemistry_data(symbol: &str, detail: impl Into<String>) -> Self {
        Self::ChemistryData {
            symbol: symbol.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates a [`MultipleFound`](Error::MultipleFound) error.
    pub fn multiple_found(query: impl Into<String>, count: usize) -> Self {
        Self::MultipleFound {
            query: query.into(),
            count,
        }
    }
}
