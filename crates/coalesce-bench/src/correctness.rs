//! Replay-based invariant checkers backed by a naive reference partition.

use std::collections::HashSet;

use coalesce_core::DisjointSet;

use crate::generator::{Op, Workload};

/// Naive partition used as a test oracle: one label per element, union by
/// exhaustive relabelling. O(n) per union and trivially correct, which is
/// all an oracle needs to be.
///
/// Ids are not bounds-checked here; callers replay workloads whose ids are
/// in range by construction (see [`check_workload_bounds`]).
#[derive(Debug, Clone)]
pub struct ReferencePartition {
    labels: Vec<usize>,
}

impl ReferencePartition {
    /// Creates a partition of `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
        }
    }

    /// Merges the components of `a` and `b` by relabelling every member of
    /// `b`'s component.
    pub fn union(&mut self, a: usize, b: usize) {
        let (la, lb) = (self.labels[a], self.labels[b]);
        if la != lb {
            for label in &mut self.labels {
                if *label == lb {
                    *label = la;
                }
            }
        }
    }

    /// Returns `true` if `a` and `b` share a label.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    /// Returns the number of elements sharing `a`'s label.
    pub fn component_size(&self, a: usize) -> usize {
        let label = self.labels[a];
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Returns the number of distinct labels.
    pub fn component_count(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }
}

/// Replays `workload` against both [`DisjointSet`] and the reference
/// partition, failing on the first divergent answer. `component_count` is
/// compared after every union, not only at the end.
pub fn check_workload(workload: &Workload) -> Result<(), String> {
    let mut ds = DisjointSet::new(workload.elements);
    let mut reference = ReferencePartition::new(workload.elements);

    for (idx, op) in workload.ops.iter().enumerate() {
        match *op {
            Op::Union(a, b) => {
                ds.union(a, b)
                    .map_err(|e| format!("op {idx}: union({a}, {b}): {e}"))?;
                reference.union(a, b);

                let got = ds.component_count();
                let want = reference.component_count();
                if got != want {
                    return Err(format!(
                        "op {idx}: component count diverged after union({a}, {b}): \
                         disjoint-set={got}, reference={want}"
                    ));
                }
            }
            Op::Find(a) => {
                // The oracle has no representative notion; the root must be
                // in range and belong to a's component.
                let root = ds
                    .find(a)
                    .map_err(|e| format!("op {idx}: find({a}): {e}"))?;
                if root >= workload.elements {
                    return Err(format!(
                        "op {idx}: find({a}) returned out-of-range root {root}"
                    ));
                }
                if !reference.connected(a, root) {
                    return Err(format!(
                        "op {idx}: find({a}) returned root {root} outside a's component"
                    ));
                }
            }
            Op::Connected(a, b) => {
                let got = ds
                    .connected(a, b)
                    .map_err(|e| format!("op {idx}: connected({a}, {b}): {e}"))?;
                let want = reference.connected(a, b);
                if got != want {
                    return Err(format!(
                        "op {idx}: connected({a}, {b}) diverged: disjoint-set={got}, \
                         reference={want}"
                    ));
                }
            }
            Op::ComponentSize(a) => {
                let got = ds
                    .component_size(a)
                    .map_err(|e| format!("op {idx}: component_size({a}): {e}"))?;
                let want = reference.component_size(a);
                if got != want {
                    return Err(format!(
                        "op {idx}: component_size({a}) diverged: disjoint-set={got}, \
                         reference={want}"
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Verifies every id in `workload` lies in `[0, elements)`.
pub fn check_workload_bounds(workload: &Workload) -> Result<(), String> {
    let n = workload.elements;
    for (idx, op) in workload.ops.iter().enumerate() {
        let ids = match *op {
            Op::Union(a, b) | Op::Connected(a, b) => [Some(a), Some(b)],
            Op::Find(a) | Op::ComponentSize(a) => [Some(a), None],
        };
        for id in ids.into_iter().flatten() {
            if id >= n {
                return Err(format!(
                    "op {idx}: id {id} out of range for a universe of {n} elements"
                ));
            }
        }
    }
    Ok(())
}

/// Verifies that after replaying `workload`, component sizes over the
/// distinct current roots sum to the universe size, and that the number of
/// distinct roots matches `component_count`.
pub fn check_size_conservation(workload: &Workload) -> Result<(), String> {
    let mut ds = workload
        .replay()
        .map_err(|e| format!("replay failed: {e}"))?;

    let mut roots = HashSet::new();
    let mut total = 0usize;
    for i in 0..workload.elements {
        let root = ds.find(i).map_err(|e| format!("find({i}): {e}"))?;
        if roots.insert(root) {
            total += ds
                .component_size(root)
                .map_err(|e| format!("component_size({root}): {e}"))?;
        }
    }

    if total != workload.elements {
        return Err(format!(
            "component sizes sum to {total}, expected {}",
            workload.elements
        ));
    }
    if roots.len() != ds.component_count() {
        return Err(format!(
            "distinct roots ({}) disagree with component_count ({})",
            roots.len(),
            ds.component_count()
        ));
    }
    Ok(())
}
