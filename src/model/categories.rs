//! Fixed category tables keyed by atomic number.
//!
//! Every table is an [`AtomicSet`] built at compile time, so membership tests
//! are a single bit probe. Derived tables ([`METALS`], [`STP_SOLIDS`]) are
//! computed from the authored ones rather than written out by hand.

use std::fmt;

pub const LARGEST_ATOMIC_NUMBER: u8 = 118;

/// A set of atomic numbers in `0..=127`, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtomicSet(u128);

impl AtomicSet {
    pub const EMPTY: AtomicSet = AtomicSet(0);

    pub const fn from_numbers(numbers: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < numbers.len() {
            bits |= 1u128 << numbers[i];
            i += 1;
        }
        AtomicSet(bits)
    }

    /// Inclusive on both ends.
    pub const fn from_range(low: u8, high: u8) -> Self {
        let mut bits = 0u128;
        let mut n = low;
        while n <= high {
            bits |= 1u128 << n;
            n += 1;
        }
        AtomicSet(bits)
    }

    pub const fn union(self, other: AtomicSet) -> Self {
        AtomicSet(self.0 | other.0)
    }

    pub const fn difference(self, other: AtomicSet) -> Self {
        AtomicSet(self.0 & !other.0)
    }

    pub const fn is_disjoint(self, other: AtomicSet) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn contains(self, n: u32) -> bool {
        n < 128 && self.0 & (1u128 << n) != 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..128).filter(move |&n| self.contains(u32::from(n)))
    }
}

impl fmt::Debug for AtomicSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Every tabulated atomic number, `1..=118`.
pub const ALL_ELEMENTS: AtomicSet = AtomicSet::from_range(1, LARGEST_ATOMIC_NUMBER);

pub const NONMETALS: AtomicSet = AtomicSet::from_numbers(&[
    1, 2, 6, 7, 8, 9, 10, 15, 16, 17, 18, 34, 35, 36, 53, 54, 85, 86, 117, 118,
]);
pub const METALLOIDS: AtomicSet = AtomicSet::from_numbers(&[5, 14, 32, 33, 51, 52, 84]);
pub const METALS: AtomicSet = ALL_ELEMENTS.difference(NONMETALS.union(METALLOIDS));

pub const STP_LIQUIDS: AtomicSet = AtomicSet::from_numbers(&[35, 80]);
pub const STP_GASES: AtomicSet =
    AtomicSet::from_numbers(&[1, 2, 7, 8, 9, 10, 17, 18, 36, 54, 86, 118]);
pub const STP_SOLIDS: AtomicSet = AtomicSet::from_range(1, LARGEST_ATOMIC_NUMBER - 1)
    .difference(STP_LIQUIDS.union(STP_GASES));

/// Noble gases in ascending order; each one closes a period.
pub const NOBLE_GAS_NUMBERS: [u8; 7] = [2, 10, 18, 36, 54, 86, 118];

pub const HALOGENS: AtomicSet = AtomicSet::from_numbers(&[9, 17, 35, 53, 85, 117]);
pub const NOBLE_GASES: AtomicSet = AtomicSet::from_numbers(&NOBLE_GAS_NUMBERS);
pub const ALKALI_METALS: AtomicSet = AtomicSet::from_numbers(&[3, 11, 19, 37, 55, 87]);
pub const ALKALI_EARTHS: AtomicSet = AtomicSet::from_numbers(&[4, 12, 20, 38, 56, 88]);

pub const LANTHANIDE_RANGE: (u8, u8) = (57, 71);
pub const ACTINIDE_RANGE: (u8, u8) = (89, 103);
pub const LANTHANIDES: AtomicSet =
    AtomicSet::from_range(LANTHANIDE_RANGE.0, LANTHANIDE_RANGE.1);
pub const ACTINIDES: AtomicSet = AtomicSet::from_range(ACTINIDE_RANGE.0, ACTINIDE_RANGE.1);

pub const TRANSITION_METALS: AtomicSet = AtomicSet::from_range(21, 30)
    .union(AtomicSet::from_range(39, 48))
    .union(AtomicSet::from_range(72, 80))
    .union(AtomicSet::from_range(104, 112));
pub const BASIC_METALS: AtomicSet =
    AtomicSet::from_numbers(&[13, 31, 49, 50, 81, 82, 83, 113, 114, 115, 116]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metallicity {
    Metal,
    Nonmetal,
    Metalloid,
}

impl Metallicity {
    /// Nonmetals are checked before metalloids; anything else is a metal.
    pub fn of(atomic_number: u8) -> Self {
        let n = u32::from(atomic_number);
        if NONMETALS.contains(n) {
            Metallicity::Nonmetal
        } else if METALLOIDS.contains(n) {
            Metallicity::Metalloid
        } else {
            Metallicity::Metal
        }
    }
}

/// Special groupings an element may belong to besides its metallicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Halogen,
    NobleGas,
    AlkaliMetal,
    AlkaliEarth,
    Lanthanide,
    Actinide,
    TransitionMetal,
    BasicMetal,
}

impl Category {
    /// Resolution order for [`Category::of`].
    pub const PRIORITY: [Category; 8] = [
        Category::Halogen,
        Category::NobleGas,
        Category::AlkaliMetal,
        Category::AlkaliEarth,
        Category::Lanthanide,
        Category::Actinide,
        Category::TransitionMetal,
        Category::BasicMetal,
    ];

    pub fn members(self) -> AtomicSet {
        match self {
            Category::Halogen => HALOGENS,
            Category::NobleGas => NOBLE_GASES,
            Category::AlkaliMetal => ALKALI_METALS,
            Category::AlkaliEarth => ALKALI_EARTHS,
            Category::Lanthanide => LANTHANIDES,
            Category::Actinide => ACTINIDES,
            Category::TransitionMetal => TRANSITION_METALS,
            Category::BasicMetal => BASIC_METALS,
        }
    }

    /// First category in [`Category::PRIORITY`] containing `atomic_number`.
    ///
    /// `None` is an ordinary answer: hydrogen, carbon, boron and friends have
    /// no special category.
    pub fn of(atomic_number: u8) -> Option<Category> {
        first_match(
            atomic_number,
            Self::PRIORITY.iter().map(|&category| (category, category.members())),
        )
    }
}

/// First-match-wins lookup over an ordered list of category tables.
pub fn first_match<K>(
    atomic_number: u8,
    tables: impl IntoIterator<Item = (K, AtomicSet)>,
) -> Option<K> {
    let n = u32::from(atomic_number);
    tables
        .into_iter()
        .find(|(_, set)| set.contains(n))
        .map(|(key, _)| key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    pub fn at_stp(atomic_number: u8) -> Self {
        let n = u32::from(atomic_number);
        if STP_LIQUIDS.contains(n) {
            Phase::Liquid
        } else if STP_GASES.contains(n) {
            Phase::Gas
        } else {
            Phase::Solid
        }
    }
}

/// Periodic-table row of `atomic_number`, 1-based.
///
/// The row is the position of the first noble gas not exceeded by
/// `atomic_number`. Past the last tabulated noble gas the result is one more
/// than the number of noble gases.
pub fn period_of(atomic_number: u8) -> u8 {
    let closed = NOBLE_GAS_NUMBERS
        .iter()
        .take_while(|&&noble| atomic_number > noble)
        .count();
    closed as u8 + 1
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exactly_one_metallicity(n in 1u8..=LARGEST_ATOMIC_NUMBER) {
            let hits = [METALS, NONMETALS, METALLOIDS]
                .iter()
                .filter(|set| set.contains(u32::from(n)))
                .count();
            prop_assert_eq!(hits, 1);
            let expected = if METALS.contains(u32::from(n)) {
                Metallicity::Metal
            } else if NONMETALS.contains(u32::from(n)) {
                Metallicity::Nonmetal
            } else {
                Metallicity::Metalloid
            };
            prop_assert_eq!(Metallicity::of(n), expected);
        }

        #[test]
        fn phase_agrees_with_tables(n in 1u8..LARGEST_ATOMIC_NUMBER) {
            let phase = Phase::at_stp(n);
            let n = u32::from(n);
            prop_assert_eq!(phase == Phase::Liquid, STP_LIQUIDS.contains(n));
            prop_assert_eq!(phase == Phase::Gas, STP_GASES.contains(n));
            prop_assert_eq!(phase == Phase::Solid, STP_SOLIDS.contains(n));
        }

        #[test]
        fn category_is_first_containing_table(n in 1u8..=LARGEST_ATOMIC_NUMBER) {
            let expected = Category::PRIORITY
                .iter()
                .copied()
                .find(|c| c.members().contains(u32::from(n)));
            prop_assert_eq!(Category::of(n), expected);
        }

        #[test]
        fn period_is_monotone(n in 1u8..LARGEST_ATOMIC_NUMBER) {
            let here = period_of(n);
            let next = period_of(n + 1);
            prop_assert!(next == here || next == here + 1);
            prop_assert!((1..=7).contains(&here));
        }
    }
}
