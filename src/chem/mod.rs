//! Symbol-keyed chemistry data.
//!
//! Element records carry only an atomic number and a symbol; mass, density,
//! name, ions and isotopes come from a [`ChemistrySource`]. The crate ships
//! one implementation, [`TableSource`], backed by a TOML table that is either
//! embedded in the library or supplied by the caller.

mod table;

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::model::types::Symbol;

pub use table::TableSource;

/// Chemistry data for one symbol. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemEntry {
    pub symbol: String,
    /// English name, lower case.
    pub name: String,
    /// Mass in amu.
    pub mass: f64,
    /// Density in g/cm³, absent where never measured.
    pub density: Option<f64>,
    /// Ionic charges, ascending.
    pub ions: Vec<i8>,
    /// Isotope mass numbers, ascending.
    pub isotopes: Vec<u16>,
}

impl ChemEntry {
    /// Lightest and heaviest known isotope.
    pub fn isotope_span(&self) -> Option<(u16, u16)> {
        Some((*self.isotopes.first()?, *self.isotopes.last()?))
    }
}

/// A lookup table of chemistry data keyed by exact symbol.
pub trait ChemistrySource: fmt::Debug + Send + Sync {
    /// Fails with [`Error::UnknownSymbol`] when `symbol` has no entry.
    fn lookup(&self, symbol: &str) -> Result<Arc<ChemEntry>, Error>;

    fn lookup_number(&self, atomic_number: u8) -> Result<Arc<ChemEntry>, Error> {
        let symbol = Symbol::from_atomic_number(atomic_number)
            .ok_or(Error::AtomicNumberOutOfRange(u16::from(atomic_number)))?;
        self.lookup(symbol.as_str())
    }
}

/// Builds the chemistry source for a configuration: the embedded table, or
/// one parsed from `custom_toml` in the same schema.
pub fn load_source(custom_toml: Option<&str>) -> Result<Arc<dyn ChemistrySource>, Error> {
    match custom_toml {
        Some(text) => Ok(Arc::new(TableSource::from_toml(text)?)),
        None => Ok(TableSource::embedded()),
    }
}
