use std::fmt;

use crate::model::categories::AtomicSet;
use crate::model::element::Element;

/// Integer columns a [`Predicate`] can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    AtomicNumber,
    Group,
}

impl Field {
    pub fn value(self, element: &Element) -> u32 {
        match self {
            Field::Id => element.id(),
            Field::AtomicNumber => u32::from(element.atomic_number()),
            Field::Group => u32::from(element.group()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::AtomicNumber => "atomic_number",
            Field::Group => "group",
        }
    }
}

/// A typed filter over element records.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    All,
    Eq(Field, u32),
    Lt(Field, u32),
    /// Inclusive on both ends.
    Range { field: Field, low: u32, high: u32 },
    In(Field, AtomicSet),
    Symbol(String),
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(field: Field, value: u32) -> Self {
        Predicate::Eq(field, value)
    }

    pub fn range(field: Field, low: u32, high: u32) -> Self {
        Predicate::Range { field, low, high }
    }

    /// `field ∈ set`, tested by a single bit probe.
    pub fn member_of(field: Field, set: AtomicSet) -> Self {
        Predicate::In(field, set)
    }

    /// OR of one equality test per value.
    pub fn any_of(field: Field, values: impl IntoIterator<Item = u32>) -> Self {
        Predicate::Or(values.into_iter().map(|v| Predicate::Eq(field, v)).collect())
    }

    pub fn symbol(symbol: impl Into<String>) -> Self {
        Predicate::Symbol(symbol.into())
    }

    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::All, p) | (p, Predicate::All) => p,
            (Predicate::And(mut lhs), Predicate::And(rhs)) => {
                lhs.extend(rhs);
                Predicate::And(lhs)
            }
            (Predicate::And(mut lhs), p) => {
                lhs.push(p);
                Predicate::And(lhs)
            }
            (p, q) => Predicate::And(vec![p, q]),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Or(mut lhs), p) => {
                lhs.push(p);
                Predicate::Or(lhs)
            }
            (p, q) => Predicate::Or(vec![p, q]),
        }
    }

    pub fn negate(self) -> Self {
        match self {
            Predicate::Not(inner) => *inner,
            p => Predicate::Not(Box::new(p)),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Eq(field, value) => field.value(element) == *value,
            Predicate::Lt(field, value) => field.value(element) < *value,
            Predicate::Range { field, low, high } => {
                let v = field.value(element);
                *low <= v && v <= *high
            }
            Predicate::In(field, set) => set.contains(field.value(element)),
            Predicate::Symbol(symbol) => element.symbol() == symbol,
            Predicate::Not(inner) => !inner.matches(element),
            Predicate::And(parts) => parts.iter().all(|p| p.matches(element)),
            Predicate::Or(parts) => parts.iter().any(|p| p.matches(element)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::All => write!(f, "*"),
            Predicate::Eq(field, v) => write!(f, "{} = {}", field.name(), v),
            Predicate::Lt(field, v) => write!(f, "{} < {}", field.name(), v),
            Predicate::Range { field, low, high } => {
                write!(f, "{} <= {} <= {}", low, field.name(), high)
            }
            Predicate::In(field, set) => write!(f, "{} in {:?}", field.name(), set),
            Predicate::Symbol(s) => write!(f, "symbol = '{}'", s),
            Predicate::Not(inner) => write!(f, "not ({})", inner),
            Predicate::And(parts) => write_joined(f, parts, " and "),
            Predicate::Or(parts) => write_joined(f, parts, " or "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Predicate], sep: &str) -> fmt::Result {
    if parts.is_empty() {
        return write!(f, "()");
    }
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "({})", part)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::TableSource;
    use crate::model::element::ElementFields;

    fn element(id: u32, atomic_number: u8, symbol: &str, group: u8) -> Element {
        Element::new(
            id,
            ElementFields::new(u16::from(atomic_number), symbol).with_group(u16::from(group)),
            TableSource::embedded(),
        )
    }

    #[test]
    fn equality_and_range() {
        let iron = element(26, 26, "Fe", 8);
        assert!(Predicate::eq(Field::AtomicNumber, 26).matches(&iron));
        assert!(!Predicate::eq(Field::Group, 9).matches(&iron));
        assert!(Predicate::range(Field::AtomicNumber, 21, 30).matches(&iron));
        assert!(!Predicate::range(Field::AtomicNumber, 27, 30).matches(&iron));
        assert!(Predicate::Lt(Field::Id, 1000).matches(&iron));
    }

    #[test]
    fn any_of_is_an_or_of_equalities() {
        let p = Predicate::any_of(Field::Group, [8, 9, 10]);
        assert_eq!(
            p,
            Predicate::Or(vec![
                Predicate::Eq(Field::Group, 8),
                Predicate::Eq(Field::Group, 9),
                Predicate::Eq(Field::Group, 10),
            ])
        );
        assert!(p.matches(&element(27, 27, "Co", 9)));
        assert!(!p.matches(&element(29, 29, "Cu", 11)));
        assert!(!Predicate::any_of(Field::Group, []).matches(&element(1, 1, "H", 1)));
    }

    #[test]
    fn membership_and_negation() {
        let set = AtomicSet::from_numbers(&[2, 10]);
        let neon = element(10, 10, "Ne", 18);
        assert!(Predicate::member_of(Field::AtomicNumber, set).matches(&neon));
        assert!(!Predicate::member_of(Field::AtomicNumber, set).negate().matches(&neon));
        let double = Predicate::member_of(Field::AtomicNumber, set).negate().negate();
        assert_eq!(double, Predicate::member_of(Field::AtomicNumber, set));
    }

    #[test]
    fn conjunction_flattens_and_drops_all() {
        let p = Predicate::All.and(Predicate::eq(Field::Group, 1));
        assert_eq!(p, Predicate::eq(Field::Group, 1));

        let q = p
            .and(Predicate::Lt(Field::Id, 1000))
            .and(Predicate::symbol("H"));
        match &q {
            Predicate::And(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected a flat conjunction, got {:?}", other),
        }
        assert!(q.matches(&element(1, 1, "H", 1)));
        assert!(!q.matches(&element(1001, 1, "D", 1)));
    }

    #[test]
    fn display_is_readable() {
        let p = Predicate::range(Field::AtomicNumber, 57, 71).and(Predicate::Lt(Field::Id, 1000));
        assert_eq!(
            p.to_string(),
            "(57 <= atomic_number <= 71) and (id < 1000)"
        );
        assert_eq!(Predicate::symbol("Ag").to_string(), "symbol = 'Ag'");
    }
}
