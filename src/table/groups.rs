use log::{debug, info};

use crate::error::Error;
use crate::model::categories::{AtomicSet, Category, LARGEST_ATOMIC_NUMBER};
use crate::model::types::Symbol::{self, *};
use crate::store::{ElementStore, Field, Predicate};

/// Which records one assignment step writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Single records looked up by symbol, one at a time.
    Symbols(&'static [Symbol]),
    /// Every record whose atomic number lies in the category table.
    Category(Category),
}

impl Selector {
    pub fn members(&self) -> AtomicSet {
        match self {
            Selector::Symbols(symbols) => symbols.iter().fold(AtomicSet::EMPTY, |set, s| {
                set.union(AtomicSet::from_numbers(&[s.atomic_number()]))
            }),
            Selector::Category(category) => category.members(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub group: u8,
    pub selector: Selector,
}

const fn symbols(group: u8, symbols: &'static [Symbol]) -> Step {
    Step {
        group,
        selector: Selector::Symbols(symbols),
    }
}

const fn category(group: u8, category: Category) -> Step {
    Step {
        group,
        selector: Selector::Category(category),
    }
}

/// Standard column placement for elements 1–118.
///
/// Lanthanides and actinides share column 3 with scandium and yttrium.
pub const GROUP_PLAN: [Step; 21] = [
    symbols(1, &[H]),
    category(1, Category::AlkaliMetal),
    category(2, Category::AlkaliEarth),
    symbols(3, &[Sc, Y]),
    category(3, Category::Lanthanide),
    category(3, Category::Actinide),
    symbols(4, &[Ti, Zr, Hf, Rf]),
    symbols(5, &[V, Nb, Ta, Db]),
    symbols(6, &[Cr, Mo, W, Sg]),
    symbols(7, &[Mn, Tc, Re, Bh]),
    symbols(8, &[Fe, Ru, Os, Hs]),
    symbols(9, &[Co, Rh, Ir, Mt]),
    symbols(10, &[Ni, Pd, Pt, Ds]),
    symbols(11, &[Cu, Ag, Au, Rg]),
    symbols(12, &[Zn, Cd, Hg, Cn]),
    symbols(13, &[B, Al, Ga, In, Tl, Nh]),
    symbols(14, &[C, Si, Ge, Sn, Pb, Fl]),
    symbols(15, &[N, P, As, Sb, Bi, Mc]),
    symbols(16, &[O, S, Se, Te, Po, Lv]),
    category(17, Category::Halogen),
    category(18, Category::NobleGas),
];

/// Checks that no atomic number is claimed by two steps of `plan`.
pub fn verify_partition(plan: &[Step]) -> Result<(), Error> {
    let mut claimed: [Option<u8>; LARGEST_ATOMIC_NUMBER as usize + 1] =
        [None; LARGEST_ATOMIC_NUMBER as usize + 1];
    for step in plan {
        for n in step.selector.members().iter() {
            let slot = &mut claimed[usize::from(n)];
            if let Some(first) = *slot {
                return Err(Error::PlanOverlap {
                    atomic_number: n,
                    first,
                    second: step.group,
                });
            }
            *slot = Some(step.group);
        }
    }
    Ok(())
}

/// Group that [`GROUP_PLAN`] gives `atomic_number`, if any.
pub fn planned_group(atomic_number: u8) -> Option<u8> {
    GROUP_PLAN
        .iter()
        .find(|step| step.selector.members().contains(u32::from(atomic_number)))
        .map(|step| step.group)
}

/// Stamps every record in `store` with its periodic-table column.
///
/// Running it again leaves the store unchanged. Returns the number of
/// record writes performed.
pub fn assign_group_numbers(store: &mut ElementStore) -> Result<usize, Error> {
    apply_plan(store, &GROUP_PLAN)
}

/// Applies an arbitrary assignment plan after checking it for overlaps.
pub fn apply_plan(store: &mut ElementStore, plan: &[Step]) -> Result<usize, Error> {
    verify_partition(plan)?;

    let mut written = 0;
    for step in plan {
        match step.selector {
            Selector::Symbols(symbols) => {
                for symbol in symbols {
                    let id = store.get_symbol(symbol.as_str())?.id();
                    written += store.update_group(&Predicate::eq(Field::Id, id), step.group)?;
                    debug!("{} -> group {}", symbol, step.group);
                }
            }
            Selector::Category(category) => {
                let predicate = Predicate::member_of(Field::AtomicNumber, category.members());
                written += store.update_group(&predicate, step.group)?;
            }
        }
    }

    info!("assigned groups to {} records in {} steps", written, plan.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::categories::ALL_ELEMENTS;
    use crate::model::labels::group_label;

    fn groups(store: &ElementStore) -> Vec<(u32, u8)> {
        store.records().map(|e| (e.id(), e.group())).collect()
    }

    #[test]
    fn plan_partitions_every_element() {
        verify_partition(&GROUP_PLAN).unwrap();
        let covered = GROUP_PLAN
            .iter()
            .fold(AtomicSet::EMPTY, |acc, step| acc.union(step.selector.members()));
        assert_eq!(covered, ALL_ELEMENTS);
    }

    #[test]
    fn overlapping_plan_is_rejected() {
        let plan = [symbols(3, &[Sc, La]), category(3, Category::Lanthanide)];
        match verify_partition(&plan) {
            Err(Error::PlanOverlap {
                atomic_number,
                first,
                second,
            }) => {
                assert_eq!(atomic_number, 57);
                assert_eq!((first, second), (3, 3));
            }
            other => panic!("expected an overlap, got {:?}", other),
        }

        let mut store = ElementStore::seeded();
        assert!(apply_plan(&mut store, &plan).is_err());
        assert!(store.records().all(|e| e.group() == 0));
    }

    #[test]
    fn clearing_step_still_counts_as_a_claim() {
        let plan = [symbols(0, &[Fe]), symbols(8, &[Fe])];
        match verify_partition(&plan) {
            Err(Error::PlanOverlap {
                atomic_number,
                first,
                second,
            }) => {
                assert_eq!(atomic_number, 26);
                assert_eq!((first, second), (0, 8));
            }
            other => panic!("expected an overlap, got {:?}", other),
        }

        let mut store = ElementStore::seeded();
        assert!(matches!(
            apply_plan(&mut store, &plan),
            Err(Error::PlanOverlap { atomic_number: 26, .. })
        ));
    }

    #[test]
    fn every_element_gets_a_group() {
        let mut store = ElementStore::seeded();
        let written = assign_group_numbers(&mut store).unwrap();
        assert_eq!(written, 118);
        for element in store.normal_elements().iter() {
            assert!((1..=18).contains(&element.group()), "{}", element.symbol());
            assert_eq!(Some(element.group()), planned_group(element.atomic_number()));
        }
    }

    #[test]
    fn isotopes_stay_unassigned() {
        let mut store = ElementStore::seeded();
        assign_group_numbers(&mut store).unwrap();
        assert_eq!(store.get_symbol("H").unwrap().group(), 1);
        assert_eq!(store.get_symbol("D").unwrap().group(), 0);
        assert_eq!(store.get_symbol("T").unwrap().group(), 0);
    }

    #[test]
    fn assignment_is_idempotent() {
        let mut store = ElementStore::seeded();
        assign_group_numbers(&mut store).unwrap();
        let once = groups(&store);
        assign_group_numbers(&mut store).unwrap();
        assert_eq!(groups(&store), once);
    }

    #[test]
    fn group_names_round_trip() {
        let mut store = ElementStore::seeded();
        assign_group_numbers(&mut store).unwrap();
        let expected = [
            ("H", "1A"),
            ("Na", "1A"),
            ("Ca", "2A"),
            ("Sc", "3B"),
            ("La", "3B"),
            ("U", "3B"),
            ("Ti", "4B"),
            ("Mn", "7B"),
            ("Fe", "8B"),
            ("Co", "8B"),
            ("Ni", "8B"),
            ("Ag", "1B"),
            ("Hg", "2B"),
            ("Al", "3A"),
            ("C", "4A"),
            ("Bi", "5A"),
            ("Po", "6A"),
            ("Cl", "7A"),
            ("Ts", "7A"),
            ("Og", "8A"),
        ];
        for (symbol, label) in expected {
            let element = store.get_symbol(symbol).unwrap();
            assert_eq!(element.group_name(), Some(label), "{}", symbol);
        }
        for symbol in Symbol::ALL {
            let element = store.get_symbol(symbol.as_str()).unwrap();
            assert_eq!(element.group_name(), group_label(element.group()));
            assert!(element.group_name().is_some(), "{}", symbol);
        }
    }

    #[test]
    fn missing_symbol_aborts_assignment() {
        let mut store = ElementStore::new(crate::chem::TableSource::embedded());
        store
            .create(1, crate::model::element::ElementFields::new(1, "H"))
            .unwrap();
        assert!(matches!(
            assign_group_numbers(&mut store),
            Err(Error::NotFound(_))
        ));
    }
}
