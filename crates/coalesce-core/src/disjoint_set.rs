//! Disjoint-set (union-find) over a fixed universe of dense integer ids.
//!
//! [`DisjointSet::find`] uses full two-pass path compression: a first walk
//! locates the root, a second walk rewrites every visited element's parent to
//! point directly at it. Combined with union-by-size in
//! [`DisjointSet::union`], this gives the usual near-constant amortized cost
//! per operation. Alongside the partition itself, each component tracks the
//! minimum and maximum element id ever merged into it, maintained
//! incrementally through the union step.

use std::mem;

use crate::error::ElementError;

/// A disjoint-set structure with path compression, union-by-size, and
/// per-component (min, max) id tracking.
///
/// Elements are the dense ids `0..n` where `n` is the universe size supplied
/// at construction; the universe never grows or shrinks afterwards.
/// Components only ever merge. Every operation that takes an element id
/// validates it first and returns [`ElementError::OutOfRange`] for ids at or
/// beyond `n`, leaving the structure untouched on failure.
///
/// # Determinism
///
/// The surviving root of a union is fully determined by component sizes and
/// argument order: the larger component's root survives, and when sizes are
/// equal the first argument's root survives. A given operation sequence
/// therefore always produces the same representatives.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    extrema: Vec<(usize, usize)>,
}

impl DisjointSet {
    /// Creates a new `DisjointSet` with `n` singleton components.
    ///
    /// Each element `i` starts as its own root with `parent[i] == i`,
    /// component size 1, and extrema `(i, i)`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            extrema: (0..n).map(|i| (i, i)).collect(),
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

    /// Returns the representative (root) of the component containing `a`.
    ///
    /// Walks the parent chain to the root, then walks it a second time
    /// rewriting every visited element to point directly at the root, so
    /// repeated lookups on the same path degrade to a single hop.
    /// Compression never changes which root an element resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn find(&mut self, a: usize) -> Result<usize, ElementError> {
        self.check(a)?;
        Ok(self.root_of(a))
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// Already-connected pairs are a no-op. Otherwise the smaller component's
    /// root is attached under the larger component's root; on equal sizes the
    /// second root goes under the first. The surviving root's size becomes
    /// the sum of both and its extrema absorb the other component's extrema;
    /// the absorbed root's size slot is zeroed and stops being meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if either id is at or beyond
    /// `self.len()`. Both ids are validated before anything is mutated, so a
    /// failed call leaves the structure exactly as it was.
    pub fn union(&mut self, a: usize, b: usize) -> Result<(), ElementError> {
        self.check(a)?;
        self.check(b)?;

        let mut ra = self.root_of(a);
        let mut rb = self.root_of(b);

        if ra == rb {
            return Ok(());
        }

        // Union-by-size; swap fires only on strictly greater, so ties keep
        // the first argument's root as the survivor.
        if self.size[rb] > self.size[ra] {
            mem::swap(&mut ra, &mut rb);
        }

        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.size[rb] = 0;

        let (min_a, max_a) = self.extrema[ra];
        let (min_b, max_b) = self.extrema[rb];
        self.extrema[ra] = (min_a.min(min_b), max_a.max(max_b));

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
    /// Always at least 1 on success.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn component_size(&mut self, a: usize) -> Result<usize, ElementError> {
        let root = self.find(a)?;
        Ok(self.size[root])
    }

    /// Returns the `(min, max)` element ids ever merged into the component
    /// containing `a`.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if `a >= self.len()`.
    pub fn component_extrema(&mut self, a: usize) -> Result<(usize, usize), ElementError> {
        let root = self.find(a)?;
        Ok(self.extrema[root])
    }

    /// Returns the number of distinct components.
    ///
    /// Scans all `n` size slots and counts the nonzero entries (a root keeps
    /// a positive size; an absorbed root's slot is permanently 0). Linear in
    /// the universe size, unlike the near-constant find-based operations.
    pub fn component_count(&self) -> usize {
        self.size.iter().filter(|&&s| s > 0).count()
    }

    /// Validates that `id` names an element of this universe.
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

    /// Root lookup with full compression. Callers must have validated `a`.
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
