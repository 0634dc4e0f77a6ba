//! Disjoint-set variant carrying an arbitrary per-component aggregate.
//!
//! [`AggregateDisjointSet`] has the same partition mechanics as
//! [`DisjointSet`](crate::DisjointSet) (full path compression,
//! union-by-size, bounds-checked operations), but instead of the hardcoded
//! (min, max) pair each component carries a caller-chosen aggregate value,
//! folded through merges by a function supplied at construction.
//! Instantiating with `(i, i)` values and a pairwise min/max merge
//! reproduces the extrema tracking; `1usize` values and addition reproduce
//! component sizes.

use std::fmt;
use std::mem;

use crate::error::ElementError;

/// A disjoint-set structure maintaining one aggregate value of type `T` per
/// component, combined on every merge by the function supplied to
/// [`AggregateDisjointSet::new`].
///
/// The merge function must be associative and commutative for the
/// per-component aggregate to be independent of union order; this is a
/// caller obligation and is not checked.
///
/// # Determinism
///
/// The surviving root of a union follows the same rule as
/// [`DisjointSet`](crate::DisjointSet): larger component wins, first
/// argument's root wins ties. With an associative, commutative merge
/// function, a given operation sequence always produces the same
/// representatives and the same aggregates.
#[derive(Clone)]
pub struct AggregateDisjointSet<T, F> {
    parent: Vec<usize>,
    size: Vec<usize>,
    values: Vec<T>,
    merge: F,
}

impl<T, F> AggregateDisjointSet<T, F>
where
    F: Fn(&T, &T) -> T,
{
    /// Creates a structure with `values.len()` singleton components, element
    /// `i` carrying aggregate `values[i]`.
    pub fn new(values: Vec<T>, merge: F) -> Self {
        let n = values.len();
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            values,
            merge,
        }
    }

    /// Returns the universe size `n`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative (root) of the component containing `a`,
    /// compressing the traversed path.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn find(&mut self, a: usize) -> Result<usize, ElementError> {
        self.check(a)?;
        Ok(self.root_of(a))
    }

    /// Merges the components containing `a` and `b`, folding their
    /// aggregates into the surviving root.
    ///
    /// Already-connected pairs are a no-op and do not re-apply the merge
    /// function. The absorbed root's size slot is zeroed and its stale
    /// aggregate is never read again.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if either id is at or beyond
    /// `self.len()`; both ids are validated before anything is mutated.
    pub fn union(&mut self, a: usize, b: usize) -> Result<(), ElementError> {
        self.check(a)?;
        self.check(b)?;

        let mut ra = self.root_of(a);
        let mut rb = self.root_of(b);

        if ra == rb {
            return Ok(());
        }

        if self.size[rb] > self.size[ra] {
            mem::swap(&mut ra, &mut rb);
        }

        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.size[rb] = 0;
        self.values[ra] = (self.merge)(&self.values[ra], &self.values[rb]);

        Ok(())
    }

    /// Returns `true` if `a` and `b` are currently in the same component.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if either id is at or beyond
    /// `self.len()`.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, ElementError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.root_of(a) == self.root_of(b))
    }

    /// Returns the number of elements in the component containing `a`.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn component_size(&mut self, a: usize) -> Result<usize, ElementError> {
        let root = self.find(a)?;
        Ok(self.size[root])
    }

    /// Returns the current aggregate of the component containing `a`.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn component_aggregate(&mut self, a: usize) -> Result<&T, ElementError> {
        let root = self.find(a)?;
        Ok(&self.values[root])
    }

    /// Returns the number of distinct components (linear scan over the size
    /// slots, as in [`DisjointSet::component_count`](crate::DisjointSet::component_count)).
    pub fn component_count(&self) -> usize {
        self.size.iter().filter(|&&s| s > 0).count()
    }

    fn check(&self, id: usize) -> Result<(), ElementError> {
        if id < self.parent.len() {
            Ok(())
        } else {
            Err(ElementError::OutOfRange {
                id,
                len: self.parent.len(),
            })
        }
    }

    fn root_of(&mut self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = a;
        while cur != root {
            cur = mem::replace(&mut self.parent[cur], root);
        }
        root
    }
}

// The merge function has no useful Debug form, so the derive is replaced by
// a manual impl over the array state.
impl<T: fmt::Debug, F> fmt::Debug for AggregateDisjointSet<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateDisjointSet")
            .field("parent", &self.parent)
            .field("size", &self.size)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::DisjointSet;

    fn minmax(a: &(usize, usize), b: &(usize, usize)) -> (usize, usize) {
        (a.0.min(b.0), a.1.max(b.1))
    }

    #[test]
    fn new_creates_singletons_with_initial_values() {
        let mut ds = AggregateDisjointSet::new(vec![10u64, 20, 30], |a, b| a + b);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.component_count(), 3);
        for (i, expected) in [(0, 10u64), (1, 20), (2, 30)] {
            assert_eq!(*ds.component_aggregate(i).expect("in range"), expected);
            assert_eq!(ds.component_size(i).expect("in range"), 1);
        }
    }

    #[test]
    fn empty_universe() {
        let mut ds = AggregateDisjointSet::new(Vec::<u32>::new(), |a, b| a + b);
        assert!(ds.is_empty());
        assert_eq!(ds.component_count(), 0);
        assert_eq!(ds.find(0), Err(ElementError::OutOfRange { id: 0, len: 0 }));
    }

    #[test]
    fn union_folds_aggregates_into_survivor() {
        let mut ds = AggregateDisjointSet::new(vec![1u64, 2, 4, 8], |a, b| a + b);
        ds.union(0, 1).expect("in range");
        ds.union(2, 3).expect("in range");
        assert_eq!(*ds.component_aggregate(1).expect("in range"), 3);
        assert_eq!(*ds.component_aggregate(2).expect("in range"), 12);

        ds.union(1, 3).expect("in range");
        assert_eq!(*ds.component_aggregate(0).expect("in range"), 15);
        assert_eq!(ds.component_size(3).expect("in range"), 4);
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    fn repeated_union_does_not_refold() {
        let mut ds = AggregateDisjointSet::new(vec![1u64, 1, 1], |a, b| a + b);
        ds.union(0, 1).expect("in range");
        ds.union(0, 1).expect("in range");
        ds.union(1, 0).expect("in range");
        assert_eq!(*ds.component_aggregate(0).expect("in range"), 2);
    }

    #[test]
    fn connected_reports_shared_component() {
        let mut ds = AggregateDisjointSet::new(vec![1u64; 4], |a, b| a + b);
        assert!(!ds.connected(0, 1).expect("in range"));

        ds.union(0, 1).expect("in range");
        ds.union(1, 2).expect("in range");

        assert!(ds.connected(0, 1).expect("in range"));
        assert!(ds.connected(0, 2).expect("in range"));
        assert!(!ds.connected(0, 3).expect("in range"));
    }

    #[test]
    fn connected_rejects_out_of_range() {
        let mut ds = AggregateDisjointSet::new(vec![1u64; 4], |a, b| a + b);
        assert_eq!(
            ds.connected(0, 9),
            Err(ElementError::OutOfRange { id: 9, len: 4 })
        );
        assert_eq!(
            ds.connected(9, 0),
            Err(ElementError::OutOfRange { id: 9, len: 4 })
        );
    }

    #[test]
    fn union_rejects_out_of_range_and_leaves_state_unchanged() {
        let mut ds = AggregateDisjointSet::new(vec![1u64, 2, 3], |a, b| a + b);
        assert_eq!(
            ds.union(0, 3),
            Err(ElementError::OutOfRange { id: 3, len: 3 })
        );
        assert_eq!(ds.component_count(), 3);
        assert_eq!(*ds.component_aggregate(0).expect("in range"), 1);
    }

    #[test]
    fn ties_keep_first_arguments_root() {
        let mut ds = AggregateDisjointSet::new(vec![0u64; 4], |a, b| a + b);
        ds.union(2, 1).expect("in range");
        assert_eq!(ds.find(1).expect("in range"), 2);
        assert_eq!(ds.find(2).expect("in range"), 2);
    }

    #[test]
    fn minmax_instantiation_matches_extrema_tracking() {
        let n = 9;
        let unions = [(1, 5), (5, 3), (2, 8), (1, 2), (0, 7)];

        let mut hardcoded = DisjointSet::new(n);
        let mut generic =
            AggregateDisjointSet::new((0..n).map(|i| (i, i)).collect(), minmax);
        for (a, b) in unions {
            hardcoded.union(a, b).expect("in range");
            generic.union(a, b).expect("in range");
        }
        for i in 0..n {
            assert_eq!(
                hardcoded.component_extrema(i).expect("in range"),
                *generic.component_aggregate(i).expect("in range"),
                "extrema mismatch at element {i}"
            );
        }
    }

    #[test]
    fn sum_of_ones_instantiation_matches_component_size() {
        let n = 12;
        let unions = [(0, 1), (1, 2), (5, 6), (6, 7), (7, 0), (10, 11)];

        let mut ds = DisjointSet::new(n);
        let mut counting = AggregateDisjointSet::new(vec![1usize; n], |a, b| a + b);
        for (a, b) in unions {
            ds.union(a, b).expect("in range");
            counting.union(a, b).expect("in range");
        }
        for i in 0..n {
            assert_eq!(
                ds.component_size(i).expect("in range"),
                *counting.component_aggregate(i).expect("in range"),
                "size mismatch at element {i}"
            );
            assert_eq!(
                ds.component_size(i).expect("in range"),
                counting.component_size(i).expect("in range")
            );
        }
    }

    #[test]
    fn debug_output_omits_merge_function() {
        let ds = AggregateDisjointSet::new(vec![1u8, 2], |a, b| a.max(b).to_owned());
        let rendered = format!("{ds:?}");
        assert!(rendered.contains("parent"));
        assert!(rendered.contains("values"));
        assert!(rendered.ends_with(".. }"));
    }
}
