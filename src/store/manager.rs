//! Named categorical views over the record collection.
//!
//! Every view is a fresh [`QuerySet`]; none of them mutate the store.

use std::fmt;
use std::str::FromStr;

use super::ElementStore;
use super::predicate::{Field, Predicate};
use super::query::QuerySet;
use crate::error::Error;
use crate::model::categories::{
    ACTINIDE_RANGE, ALKALI_EARTHS, ALKALI_METALS, AtomicSet, BASIC_METALS, HALOGENS,
    LANTHANIDE_RANGE, METALLOIDS, METALS, NOBLE_GASES, NONMETALS, TRANSITION_METALS,
};
use crate::model::element::{Element, ISOTOPE_ID_FLOOR};
use crate::model::labels::{GROUP_COUNT, columns_for_label, group_label};

/// The categorical views exposed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Normal,
    Metals,
    Nonmetals,
    Metalloids,
    Halogens,
    NobleGases,
    AlkaliMetals,
    AlkaliEarths,
    TransitionMetals,
    BasicMetals,
    Lanthanides,
    Actinides,
}

impl View {
    pub const ALL: [View; 12] = [
        View::Normal,
        View::Metals,
        View::Nonmetals,
        View::Metalloids,
        View::Halogens,
        View::NobleGases,
        View::AlkaliMetals,
        View::AlkaliEarths,
        View::TransitionMetals,
        View::BasicMetals,
        View::Lanthanides,
        View::Actinides,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Normal => "normal",
            View::Metals => "metals",
            View::Nonmetals => "nonmetals",
            View::Metalloids => "metalloids",
            View::Halogens => "halogens",
            View::NobleGases => "noble-gases",
            View::AlkaliMetals => "alkali-metals",
            View::AlkaliEarths => "alkali-earths",
            View::TransitionMetals => "transition-metals",
            View::BasicMetals => "basic-metals",
            View::Lanthanides => "lanthanides",
            View::Actinides => "actinides",
        }
    }

    /// The predicate selecting this view's records.
    pub fn predicate(self) -> Predicate {
        let atomic = |set: AtomicSet| Predicate::member_of(Field::AtomicNumber, set);
        let span = |(low, high): (u8, u8)| {
            Predicate::range(Field::AtomicNumber, u32::from(low), u32::from(high))
        };
        match self {
            View::Normal => Predicate::Lt(Field::Id, ISOTOPE_ID_FLOOR),
            View::Metals => atomic(METALS),
            View::Nonmetals => atomic(NONMETALS),
            View::Metalloids => atomic(METALLOIDS),
            View::Halogens => atomic(HALOGENS),
            View::NobleGases => atomic(NOBLE_GASES),
            View::AlkaliMetals => atomic(ALKALI_METALS),
            View::AlkaliEarths => atomic(ALKALI_EARTHS),
            View::TransitionMetals => atomic(TRANSITION_METALS),
            View::BasicMetals => atomic(BASIC_METALS),
            View::Lanthanides => span(LANTHANIDE_RANGE),
            View::Actinides => span(ACTINIDE_RANGE),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        View::ALL
            .into_iter()
            .find(|view| view.name() == wanted)
            .ok_or_else(|| format!("unknown view '{}'", s))
    }
}

/// A group given either by column number or by traditional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey<'a> {
    Number(u8),
    Label(&'a str),
}

impl From<u8> for GroupKey<'_> {
    fn from(n: u8) -> Self {
        GroupKey::Number(n)
    }
}

impl<'a> From<&'a str> for GroupKey<'a> {
    fn from(s: &'a str) -> Self {
        match s.trim().parse::<u8>() {
            Ok(n) => GroupKey::Number(n),
            Err(_) => GroupKey::Label(s),
        }
    }
}

impl GroupKey<'_> {
    /// Stored group values equivalent to this key.
    pub fn columns(&self) -> Result<&'static [u8], Error> {
        let label = match *self {
            GroupKey::Number(n) if (1..=GROUP_COUNT).contains(&n) => group_label(n),
            GroupKey::Number(_) => None,
            GroupKey::Label(label) => Some(label),
        };
        let columns = label.map(columns_for_label).unwrap_or(&[]);
        if columns.is_empty() {
            return Err(Error::InvalidGroup(self.to_string()));
        }
        Ok(columns)
    }

    pub fn predicate(&self) -> Result<Predicate, Error> {
        Ok(match self.columns()? {
            [single] => Predicate::eq(Field::Group, u32::from(*single)),
            many => Predicate::any_of(Field::Group, many.iter().map(|&c| u32::from(c))),
        })
    }
}

impl fmt::Display for GroupKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Number(n) => write!(f, "{}", n),
            GroupKey::Label(label) => f.write_str(label),
        }
    }
}

impl ElementStore {
    pub fn view(&self, view: View) -> QuerySet<'_> {
        self.filter(view.predicate())
    }

    /// Every record except the hydrogen isotopes.
    pub fn normal_elements(&self) -> QuerySet<'_> {
        self.view(View::Normal)
    }

    /// Records in the precomputed metals table.
    pub fn metals(&self) -> QuerySet<'_> {
        self.view(View::Metals)
    }

    pub fn nonmetals(&self) -> QuerySet<'_> {
        self.view(View::Nonmetals)
    }

    pub fn metalloids(&self) -> QuerySet<'_> {
        self.view(View::Metalloids)
    }

    pub fn halogens(&self) -> QuerySet<'_> {
        self.view(View::Halogens)
    }

    pub fn noble_gases(&self) -> QuerySet<'_> {
        self.view(View::NobleGases)
    }

    pub fn alkali_metals(&self) -> QuerySet<'_> {
        self.view(View::AlkaliMetals)
    }

    pub fn alkali_earths(&self) -> QuerySet<'_> {
        self.view(View::AlkaliEarths)
    }

    pub fn transition_metals(&self) -> QuerySet<'_> {
        self.view(View::TransitionMetals)
    }

    pub fn basic_metals(&self) -> QuerySet<'_> {
        self.view(View::BasicMetals)
    }

    pub fn lanthanides(&self) -> QuerySet<'_> {
        self.view(View::Lanthanides)
    }

    pub fn actinides(&self) -> QuerySet<'_> {
        self.view(View::Actinides)
    }

    /// Records whose group carries the same label as `key`.
    ///
    /// `"8B"` (or any of columns 8, 9, 10) selects all three triad columns.
    pub fn group_named<'k>(&self, key: impl Into<GroupKey<'k>>) -> Result<QuerySet<'_>, Error> {
        Ok(self.filter(key.into().predicate()?))
    }
}

impl Element {
    /// Every record in `store` sharing this element's group label.
    pub fn group_members<'s>(&self, store: &'s ElementStore) -> Result<QuerySet<'s>, Error> {
        store.group_named(self.group())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::groups::assign_group_numbers;

    fn grouped() -> ElementStore {
        let mut store = ElementStore::seeded();
        assign_group_numbers(&mut store).unwrap();
        store
    }

    #[test]
    fn category_view_sizes() {
        let store = ElementStore::seeded();
        assert_eq!(store.metals().count(), 91);
        assert_eq!(store.metalloids().count(), 7);
        assert_eq!(store.noble_gases().count(), 7);
        assert_eq!(store.halogens().count(), 6);
        assert_eq!(store.alkali_metals().count(), 6);
        assert_eq!(store.alkali_earths().count(), 6);
        assert_eq!(store.transition_metals().count(), 38);
        assert_eq!(store.basic_metals().count(), 11);
        assert_eq!(store.lanthanides().count(), 15);
        assert_eq!(store.actinides().count(), 15);
    }

    #[test]
    fn nonmetals_include_hydrogen_isotopes_unless_normalised() {
        let store = ElementStore::seeded();
        assert_eq!(store.nonmetals().count(), 22);
        assert_eq!(store.nonmetals().filter(View::Normal.predicate()).count(), 20);
    }

    #[test]
    fn normal_elements_drop_isotopes() {
        let store = ElementStore::seeded();
        let at_one = Predicate::eq(Field::AtomicNumber, 1);
        assert_eq!(store.filter(at_one.clone()).count(), 3);
        let normal_hydrogen = store.normal_elements().filter(at_one);
        assert_eq!(normal_hydrogen.symbols(), vec!["H"]);
        assert_eq!(store.normal_elements().count(), 118);
    }

    #[test]
    fn views_partition_metallicity() {
        let store = ElementStore::seeded();
        let normal = store.normal_elements();
        let total = normal.filter(View::Metals.predicate()).count()
            + normal.filter(View::Nonmetals.predicate()).count()
            + normal.filter(View::Metalloids.predicate()).count();
        assert_eq!(total, 118);
    }

    #[test]
    fn lanthanide_view_is_a_range() {
        let store = ElementStore::seeded();
        let symbols = store.lanthanides().symbols();
        assert_eq!(symbols.first(), Some(&"La"));
        assert_eq!(symbols.last(), Some(&"Lu"));
        assert_eq!(
            View::Lanthanides.predicate(),
            Predicate::range(Field::AtomicNumber, 57, 71)
        );
    }

    #[test]
    fn views_leave_the_store_untouched() {
        let store = ElementStore::seeded();
        let _ = store.metals().to_vec();
        let _ = store.halogens().exclude(Predicate::symbol("F")).count();
        assert_eq!(store.len(), 120);
    }

    #[test]
    fn view_names_parse() {
        for view in View::ALL {
            assert_eq!(view.name().parse::<View>().unwrap(), view);
        }
        assert_eq!("noble_gases".parse::<View>().unwrap(), View::NobleGases);
        assert_eq!("Metals".parse::<View>().unwrap(), View::Metals);
        assert!("gases".parse::<View>().is_err());
    }

    #[test]
    fn group_key_parsing() {
        assert_eq!(GroupKey::from("8"), GroupKey::Number(8));
        assert_eq!(GroupKey::from(" 17 "), GroupKey::Number(17));
        assert_eq!(GroupKey::from("8b"), GroupKey::Label("8b"));
    }

    #[test]
    fn triad_label_matches_three_columns() {
        let store = grouped();
        let triad = store.group_named("8B").unwrap();
        let expected = store
            .all()
            .filter(Predicate::range(Field::Group, 8, 10))
            .symbols();
        assert_eq!(triad.symbols(), expected);
        assert_eq!(triad.count(), 12);
        assert!(triad.symbols().contains(&"Fe"));
        assert!(triad.symbols().contains(&"Ni"));
    }

    #[test]
    fn numeric_and_label_keys_agree() {
        let store = grouped();
        assert_eq!(
            store.group_named(9u8).unwrap().symbols(),
            store.group_named("8b").unwrap().symbols()
        );
        assert_eq!(
            store.group_named("7a").unwrap().symbols(),
            vec!["F", "Cl", "Br", "I", "At", "Ts"]
        );
        assert_eq!(
            store.group_named(1u8).unwrap().symbols(),
            vec!["H", "Li", "Na", "K", "Rb", "Cs", "Fr"]
        );
    }

    #[test]
    fn invalid_groups_are_rejected() {
        let store = ElementStore::seeded();
        assert!(matches!(store.group_named(0u8), Err(Error::InvalidGroup(_))));
        assert!(matches!(store.group_named(19u8), Err(Error::InvalidGroup(_))));
        assert!(matches!(store.group_named("9Z"), Err(Error::InvalidGroup(g)) if g == "9Z"));
    }

    #[test]
    fn group_members_of_iron() {
        let store = grouped();
        let iron = store.get_symbol("Fe").unwrap();
        let members = iron.group_members(&store).unwrap();
        assert!(members.contains(iron));
        assert!(members.contains(store.get_symbol("Co").unwrap()));
        assert!(!members.contains(store.get_symbol("Cu").unwrap()));
    }

    #[test]
    fn unassigned_record_has_no_group_members() {
        let store = ElementStore::seeded();
        let deuterium = store.get_symbol("D").unwrap();
        assert!(matches!(
            deuterium.group_members(&store),
            Err(Error::InvalidGroup(_))
        ));
    }
}
