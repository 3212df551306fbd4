//! Generic filter-then-sort stage over in-memory lists

use std::cmp::Ordering;

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;
type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;

/// A reusable `filter(predicate) -> sort(comparator)` pipeline.
///
/// Applying it never touches the source slice: the result is a fresh `Vec`.
/// Without a comparator the filtered items keep their source order.
pub struct FilterSort<'a, T> {
    predicate: Option<Predicate<'a, T>>,
    comparator: Option<Comparator<'a, T>>,
}

impl<'a, T> Default for FilterSort<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterSort<'a, T> {
    /// Pipeline that keeps everything in source order
    pub fn new() -> Self {
        Self {
            predicate: None,
            comparator: None,
        }
    }

    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn sort_by<C>(mut self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Borrowing variant of [`apply`](Self::apply).
    pub fn apply_ref<'s>(&self, items: &'s [T]) -> Vec<&'s T> {
        let mut selected: Vec<&T> = match &self.predicate {
            Some(predicate) => items.iter().filter(|item| predicate(*item)).collect(),
            None => items.iter().collect(),
        };

        if let Some(comparator) = &self.comparator {
            // stable: equal items keep source order
            selected.sort_by(|a, b| comparator(*a, *b));
        }

        selected
    }
}

impl<'a, T: Clone> FilterSort<'a, T> {
    pub fn apply(&self, items: &[T]) -> Vec<T> {
        self.apply_ref(items).into_iter().cloned().collect()
    }
}
