//! Periodic-table structure on top of the element store.
//!
//! [`groups`] stamps each record with its column; [`layout`] arranges the
//! stamped records into the period × group grid.

pub mod groups;
pub mod layout;

pub use groups::{GROUP_PLAN, assign_group_numbers};
pub use layout::{PeriodicTable, TableRow};
