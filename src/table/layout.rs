use std::collections::BTreeMap;

use log::warn;

use crate::model::element::Element;
use crate::model::labels::GROUP_COUNT;
use crate::store::{ElementStore, View};

const WIDTH: usize = GROUP_COUNT as usize;

/// One period of the main grid; `cells[g - 1]` holds the element in group `g`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'s> {
    pub period: u8,
    pub cells: [Option<&'s Element>; WIDTH],
}

impl<'s> TableRow<'s> {
    fn empty(period: u8) -> Self {
        Self {
            period,
            cells: [None; WIDTH],
        }
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

/// The main period × group grid plus the two f-block series.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTable<'s> {
    pub rows: Vec<TableRow<'s>>,
    pub lanthanides: Vec<&'s Element>,
    pub actinides: Vec<&'s Element>,
}

impl<'s> PeriodicTable<'s> {
    /// Lays out the normal elements of `store`.
    ///
    /// Records whose group is still unassigned cannot be placed and are
    /// skipped. If two records claim the same cell the later one wins.
    pub fn build(store: &'s ElementStore) -> Self {
        let lanthanides = store.lanthanides().to_vec();
        let actinides = store.actinides().to_vec();

        let main = store
            .normal_elements()
            .exclude(View::Lanthanides.predicate())
            .exclude(View::Actinides.predicate());

        let mut rows: BTreeMap<u8, TableRow<'s>> = BTreeMap::new();
        for element in main.iter() {
            let group = element.group();
            if group == 0 || group > GROUP_COUNT {
                warn!(
                    "{} has no group assigned; left out of the table",
                    element.symbol()
                );
                continue;
            }
            let period = element.period();
            let row = rows.entry(period).or_insert_with(|| TableRow::empty(period));
            row.cells[usize::from(group) - 1] = Some(element);
        }

        Self {
            rows: rows.into_values().collect(),
            lanthanides,
            actinides,
        }
    }

    pub fn cell(&self, period: u8, group: u8) -> Option<&'s Element> {
        if group == 0 || group > GROUP_COUNT {
            return None;
        }
        self.rows
            .iter()
            .find(|row| row.period == period)
            .and_then(|row| row.cells[usize::from(group) - 1])
    }
}
