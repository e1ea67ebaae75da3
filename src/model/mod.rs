//! Element records and the static tables they are classified by.
//!
//! - [`types`] – Chemical symbols for atomic numbers 1–118.
//! - [`categories`] – Fixed category tables (metallicity, special groups, STP phase)
//!   and the period calculation.
//! - [`labels`] – Group column labels and presentation vocabularies.
//! - [`element`] – The stored element record and its derived properties.
//!
//! Every classification is a pure function of the atomic number; only the
//! group column is ever written after a record is created.

pub mod categories;
pub mod element;
pub mod labels;
pub mod types;
