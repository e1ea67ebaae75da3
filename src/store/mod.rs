//! In-memory persistence for element records.
//!
//! [`ElementStore`] keeps records ordered by identifier and offers the
//! primitives the rest of the crate is written against: validated create,
//! filter/exclude views ([`QuerySet`]), single-record get, and bulk update of
//! the group column by [`Predicate`]. The categorical views live in
//! [`manager`].

pub mod manager;
pub mod predicate;
pub mod query;
mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};

use crate::chem::{ChemistrySource, TableSource};
use crate::error::Error;
use crate::model::categories::LARGEST_ATOMIC_NUMBER;
use crate::model::element::{Element, ElementFields};
use crate::model::labels::GROUP_COUNT;

pub use manager::{GroupKey, View};
pub use predicate::{Field, Predicate};
pub use query::QuerySet;
pub use seed::{DEUTERIUM_ID, TRITIUM_ID, seed_records};

const MAX_SYMBOL_CHARS: usize = 3;

#[derive(Debug, Clone)]
pub struct ElementStore {
    records: BTreeMap<u32, Element>,
    source: Arc<dyn ChemistrySource>,
}

impl ElementStore {
    /// An empty store resolving chemistry through `source`.
    pub fn new(source: Arc<dyn ChemistrySource>) -> Self {
        Self {
            records: BTreeMap::new(),
            source,
        }
    }

    /// The built-in record set (elements 1–118 plus deuterium and tritium,
    /// groups unassigned) over the embedded chemistry table.
    pub fn seeded() -> Self {
        let mut store = Self::new(TableSource::embedded());
        for (id, fields) in seed_records() {
            store.insert_unchecked(id, fields);
        }
        store
    }

    /// A store filled from `records`, validating each one.
    pub fn from_records(
        records: impl IntoIterator<Item = (u32, ElementFields)>,
        source: Arc<dyn ChemistrySource>,
    ) -> Result<Self, Error> {
        let mut store = Self::new(source);
        for (id, fields) in records {
            store.create(id, fields)?;
        }
        info!("loaded {} element records", store.len());
        Ok(store)
    }

    pub fn source(&self) -> &Arc<dyn ChemistrySource> {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates and stores a new record.
    pub fn create(&mut self, id: u32, fields: ElementFields) -> Result<&Element, Error> {
        validate(&fields)?;
        if self.records.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        debug!("created {} (id {})", fields.symbol, id);
        Ok(self.insert_unchecked(id, fields))
    }

    fn insert_unchecked(&mut self, id: u32, fields: ElementFields) -> &Element {
        let element = Element::new(id, fields, Arc::clone(&self.source));
        self.records.entry(id).or_insert(element)
    }

    pub fn all(&self) -> QuerySet<'_> {
        QuerySet::new(self, Predicate::All)
    }

    pub fn filter(&self, predicate: Predicate) -> QuerySet<'_> {
        QuerySet::new(self, predicate)
    }

    pub fn exclude(&self, predicate: Predicate) -> QuerySet<'_> {
        QuerySet::new(self, predicate.negate())
    }

    pub fn get(&self, predicate: Predicate) -> Result<&Element, Error> {
        self.all().get(predicate)
    }

    pub fn get_symbol(&self, symbol: &str) -> Result<&Element, Error> {
        self.get(Predicate::symbol(symbol))
    }

    /// Sets the group column of every record matching `predicate`.
    /// Returns the number of records written.
    pub fn update_group(&mut self, predicate: &Predicate, group: u8) -> Result<usize, Error> {
        if group > GROUP_COUNT {
            return Err(Error::GroupOutOfRange(u16::from(group)));
        }
        let mut written = 0;
        for element in self.records.values_mut() {
            if predicate.matches(element) {
                element.set_group(group);
                written += 1;
            }
        }
        debug!("set group {} on {} records where {}", group, written, predicate);
        Ok(written)
    }

    /// Records in identifier order.
    pub fn records(&self) -> impl Iterator<Item = &Element> {
        self.records.values()
    }
}

fn validate(fields: &ElementFields) -> Result<(), Error> {
    if !(1..=u16::from(LARGEST_ATOMIC_NUMBER)).contains(&fields.atomic_number) {
        return Err(Error::AtomicNumberOutOfRange(fields.atomic_number));
    }
    if fields.group > u16::from(GROUP_COUNT) {
        return Err(Error::GroupOutOfRange(fields.group));
    }
    let chars = fields.symbol.chars().count();
    if chars == 0 || chars > MAX_SYMBOL_CHARS {
        return Err(Error::InvalidSymbol(fields.symbol.clone()));
    }
    Ok(())
}
