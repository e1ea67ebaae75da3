use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::debug;
use serde::Deserialize;

use super::{ChemEntry, ChemistrySource};
use crate::error::Error;

const EMBEDDED_CHEMISTRY_TOML: &str = include_str!("../../resources/chemistry.toml");

static EMBEDDED: OnceLock<Arc<TableSource>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct ChemistryFile {
    #[serde(default)]
    elements: HashMap<String, RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    mass: f64,
    #[serde(default)]
    density: Option<f64>,
    #[serde(default)]
    ions: Vec<i8>,
    #[serde(default)]
    isotopes: IsotopeSpec,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IsotopeSpec {
    Span { first: u16, last: u16 },
    List(Vec<u16>),
}

impl Default for IsotopeSpec {
    fn default() -> Self {
        IsotopeSpec::List(Vec::new())
    }
}

impl IsotopeSpec {
    fn expand(self) -> Vec<u16> {
        match self {
            IsotopeSpec::Span { first, last } => (first..=last).collect(),
            IsotopeSpec::List(mut list) => {
                list.sort_unstable();
                list.dedup();
                list
            }
        }
    }
}

/// A [`ChemistrySource`] backed by an in-memory table.
#[derive(Debug, Default)]
pub struct TableSource {
    entries: HashMap<String, Arc<ChemEntry>>,
}

impl TableSource {
    /// Parses a table in the schema of the embedded `chemistry.toml`.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let file: ChemistryFile = toml::from_str(text)?;
        let mut entries = HashMap::with_capacity(file.elements.len());

        for (symbol, raw) in file.elements {
            if symbol.is_empty() || symbol.chars().count() > 3 {
                return Err(Error::InvalidSymbol(symbol));
            }
            if !(raw.mass.is_finite() && raw.mass > 0.0) {
                return Err(Error::chemistry_data(&symbol, "mass must be positive"));
            }
            if raw.density.is_some_and(|d| !(d.is_finite() && d > 0.0)) {
                return Err(Error::chemistry_data(&symbol, "density must be positive"));
            }
            if let IsotopeSpec::Span { first, last } = raw.isotopes {
                if first > last {
                    return Err(Error::chemistry_data(
                        &symbol,
                        format!("isotope span {}..{} is reversed", first, last),
                    ));
                }
            }

            let mut ions = raw.ions;
            ions.sort_unstable();

            let entry = ChemEntry {
                symbol: symbol.clone(),
                name: raw.name,
                mass: raw.mass,
                density: raw.density,
                ions,
                isotopes: raw.isotopes.expand(),
            };
            entries.insert(symbol, Arc::new(entry));
        }

        debug!("loaded chemistry data for {} symbols", entries.len());
        Ok(Self { entries })
    }

    /// The table compiled into the library, parsed on first use.
    pub fn embedded() -> Arc<TableSource> {
        EMBEDDED
            .get_or_init(|| {
                Arc::new(
                    TableSource::from_toml(EMBEDDED_CHEMISTRY_TOML)
                        .expect("Failed to parse embedded chemistry data. This is a library bug."),
                )
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ChemistrySource for TableSource {
    fn lookup(&self, symbol: &str) -> Result<Arc<ChemEntry>, Error> {
        self.entries
            .get(symbol)
            .cloned()
            .ok_or_else(|| Error::UnknownSymbol(symbol.to_string()))
    }
}
