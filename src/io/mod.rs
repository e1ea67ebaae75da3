//! Bulk load and dump of element records.
//!
//! Records travel as a JSON array of `{ "model", "pk", "fields" }` objects,
//! the layout used for the initial data load.

pub mod error;
pub mod fixture;

pub use error::Error;
pub use fixture::{FIXTURE_MODEL, FixtureRecord, read, read_file, write, write_file};
