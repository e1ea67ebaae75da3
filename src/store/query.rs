use super::ElementStore;
use super::predicate::Predicate;
use crate::error::Error;
use crate::model::element::Element;

/// A lazily evaluated, read-only view over an [`ElementStore`].
///
/// Narrowing a view with [`filter`](Self::filter) or
/// [`exclude`](Self::exclude) builds a new view; the store itself is never
/// touched. Records come out in identifier order.
#[derive(Debug, Clone)]
pub struct QuerySet<'s> {
    store: &'s ElementStore,
    predicate: Predicate,
}

impl<'s> QuerySet<'s> {
    pub(crate) fn new(store: &'s ElementStore, predicate: Predicate) -> Self {
        Self { store, predicate }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn filter(&self, predicate: Predicate) -> QuerySet<'s> {
        QuerySet::new(self.store, self.predicate.clone().and(predicate))
    }

    pub fn exclude(&self, predicate: Predicate) -> QuerySet<'s> {
        QuerySet::new(self.store, self.predicate.clone().and(predicate.negate()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'s Element> + '_ {
        self.store
            .records
            .values()
            .filter(move |e| self.predicate.matches(e))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn first(&self) -> Option<&'s Element> {
        self.iter().next()
    }

    /// Exactly one record matching both this view and `predicate`.
    pub fn get(&self, predicate: Predicate) -> Result<&'s Element, Error> {
        let narrowed = self.filter(predicate);
        let mut hits = narrowed.iter();
        let found = hits
            .next()
            .ok_or_else(|| Error::NotFound(narrowed.predicate.to_string()))?;
        let extra = hits.count();
        if extra > 0 {
            return Err(Error::multiple_found(
                narrowed.predicate.to_string(),
                extra + 1,
            ));
        }
        Ok(found)
    }

    pub fn contains(&self, element: &Element) -> bool {
        self.store
            .records
            .get(&element.id())
            .is_some_and(|stored| self.predicate.matches(stored))
    }

    pub fn to_vec(&self) -> Vec<&'s Element> {
        self.iter().collect()
    }

    pub fn symbols(&self) -> Vec<&'s str> {
        self.iter().map(Element::symbol).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::predicate::Field;

    #[test]
    fn filter_narrows_without_touching_the_store() {
        let store = ElementStore::seeded();
        let all = store.all();
        let light = all.filter(Predicate::range(Field::AtomicNumber, 1, 2));
        assert_eq!(light.symbols(), vec!["H", "He", "D", "T"]);
        assert_eq!(all.count(), store.len());
    }

    #[test]
    fn exclude_removes_matches() {
        let store = ElementStore::seeded();
        let no_hydrogen = store
            .all()
            .filter(Predicate::range(Field::AtomicNumber, 1, 3))
            .exclude(Predicate::eq(Field::AtomicNumber, 1));
        assert_eq!(no_hydrogen.symbols(), vec!["He", "Li"]);
    }

    #[test]
    fn get_requires_exactly_one_match() {
        let store = ElementStore::seeded();
        let silver = store.all().get(Predicate::symbol("Ag")).unwrap();
        assert_eq!(silver.atomic_number(), 47);

        assert!(matches!(
            store.all().get(Predicate::symbol("Zz")),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.all().get(Predicate::eq(Field::AtomicNumber, 1)),
            Err(Error::MultipleFound { count: 3, .. })
        ));
    }

    #[test]
    fn contains_checks_the_view_predicate() {
        let store = ElementStore::seeded();
        let light = store.all().filter(Predicate::Lt(Field::AtomicNumber, 10));
        let carbon = store.get_symbol("C").unwrap();
        let neon = store.get_symbol("Ne").unwrap();
        assert!(light.contains(carbon));
        assert!(!light.contains(neon));
    }
}
