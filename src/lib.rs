//! Periodic-table element records with derived chemistry, categorical queries
//! and a period × group layout.
//!
//! # Features
//!
//! - **Category tables** — Compile-time atomic-number sets for metallicity,
//!   special groups (halogens, noble gases, lanthanides, …) and STP phase
//! - **Chemistry data** — Mass, density, name, ions and isotopes per symbol,
//!   resolved lazily and cached per record
//! - **Queries** — Typed predicates and lazy views over the record collection,
//!   including lookup of a group by number or traditional label
//! - **Layout** — Group assignment for every element and the 18-column grid
//!   with the lanthanide and actinide rows split out
//! - **Fixtures** — JSON load and dump of the stored records
//!
//! # Quick Start
//!
//! [`open`] builds a store from a [`Config`]; the default one seeds all 118
//! elements plus deuterium and tritium and assigns their groups:
//!
//! ```
//! use periodic_table::{open, Config, Error, Metallicity, PeriodicTable};
//!
//! let store = open(&Config::default())?;
//!
//! let silver = store.get_symbol("Ag")?;
//! assert_eq!(silver.atomic_number(), 47);
//! assert_eq!(silver.metallicity(), Metallicity::Metal);
//! assert_eq!(silver.period(), 5);
//! assert_eq!(silver.name()?, "silver");
//! assert_eq!(silver.group_name(), Some("1B"));
//!
//! // Hydrogen is stored three times: H, D and T.
//! assert_eq!(store.normal_elements().count(), 118);
//! assert_eq!(store.metals().count(), 91);
//!
//! // "8B" spans columns 8, 9 and 10.
//! assert_eq!(store.group_named("8B")?.count(), 12);
//!
//! let table = PeriodicTable::build(&store);
//! assert_eq!(table.rows.len(), 7);
//! assert_eq!(table.lanthanides.len(), 15);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Symbols, category tables, label tables and the element record
//! - [`chem`] — The chemistry data adapter and its embedded table
//! - [`store`] — The in-memory record store, predicates and categorical views
//! - [`table`] — Group assignment and the periodic-table grid
//! - [`io`] — JSON fixture load and dump

mod config;
mod error;

pub mod chem;
pub mod io;
pub mod model;
pub mod store;
pub mod table;

pub use config::Config;
pub use error::Error;

pub use chem::{ChemEntry, ChemistrySource, TableSource};
pub use model::categories::{AtomicSet, Category, Metallicity, Phase};
pub use model::element::{Element, ElementFields};
pub use model::labels::{CSS_CLASSES, HUMAN_LABELS, LabelStyle, Labels};
pub use model::types::{ParseSymbolError, Symbol};
pub use store::{ElementStore, Field, GroupKey, Predicate, QuerySet, View};
pub use table::{PeriodicTable, TableRow, assign_group_numbers};

/// Builds an element store as described by `config`.
///
/// Resolves the chemistry source, loads the fixture (or the built-in seed),
/// then stamps group numbers unless disabled.
pub fn open(config: &Config) -> Result<ElementStore, Error> {
    let source = chem::load_source(config.chemistry.as_deref())?;

    let records = match config.fixture.as_deref() {
        Some(json) => io::read(json.as_bytes())?,
        None => store::seed_records(),
    };
    let mut store = ElementStore::from_records(records, source)?;

    if config.assign_groups {
        assign_group_numbers(&mut store)?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_seeds_and_assigns() {
        let store = open(&Config::default()).unwrap();
        assert_eq!(store.len(), 120);
        assert_eq!(store.get_symbol("Fe").unwrap().group(), 8);
        assert_eq!(store.get_symbol("D").unwrap().group(), 0);
    }

    #[test]
    fn group_assignment_can_be_skipped() {
        let store = open(&Config::default().without_group_assignment()).unwrap();
        assert!(store.records().all(|e| e.group() == 0));
    }

    #[test]
    fn custom_chemistry_replaces_embedded_table() {
        let toml = r#"
            [elements]
            Fe = { name = "ferrum", mass = 55.845, density = 7.874, ions = [2, 3], isotopes = { first = 45, last = 72 } }
        "#;
        let store = open(&Config::default().with_chemistry(toml)).unwrap();
        let iron = store.get_symbol("Fe").unwrap();
        assert_eq!(iron.name().unwrap(), "ferrum");
        assert!(matches!(
            store.get_symbol("Ag").unwrap().name(),
            Err(Error::UnknownSymbol(_))
        ));
    }

    #[test]
    fn fixture_records_replace_the_seed() {
        let json = r#"[
            {"model": "periodic_table.element", "pk": 1, "fields": {"atomic_number": 1, "symbol": "H"}},
            {"model": "periodic_table.element", "pk": 2, "fields": {"atomic_number": 2, "symbol": "He"}}
        ]"#;
        let config = Config::default()
            .with_fixture(json)
            .without_group_assignment();
        let store = open(&config).unwrap();
        assert_eq!(store.all().symbols(), vec!["H", "He"]);
    }

    #[test]
    fn invalid_fixture_records_are_rejected() {
        let json = r#"[{"model": "periodic_table.element", "pk": 1,
                        "fields": {"atomic_number": 120, "symbol": "Ubn"}}]"#;
        let config = Config::default().with_fixture(json);
        assert!(matches!(
            open(&config),
            Err(Error::AtomicNumberOutOfRange(120))
        ));

        let json = r#"[{"model": "periodic_table.element", "pk": 1,
                        "fields": {"atomic_number": 300, "symbol": "X"}}]"#;
        let config = Config::default().with_fixture(json);
        assert!(matches!(
            open(&config),
            Err(Error::AtomicNumberOutOfRange(300))
        ));

        let json = r#"[{"model": "periodic_table.element", "pk": 1,
                        "fields": {"atomic_number": 1, "symbol": "H", "group": 300}}]"#;
        let config = Config::default().with_fixture(json);
        assert!(matches!(open(&config), Err(Error::GroupOutOfRange(300))));

        let config = Config::default().with_fixture("not json");
        assert!(matches!(open(&config), Err(Error::Io(io::Error::Json { .. }))));
    }

    #[test]
    fn partial_fixture_cannot_be_grouped() {
        let json = r#"[{"model": "periodic_table.element", "pk": 1,
                        "fields": {"atomic_number": 1, "symbol": "H"}}]"#;
        let config = Config::default().with_fixture(json);
        assert!(matches!(open(&config), Err(Error::NotFound(_))));
    }
}
