//! Disjoint-set workload generator.
//!
//! Produces deterministic operation sequences over a fixed universe, with a
//! configurable mix of unions and queries and a choice of union-pair
//! topologies, for benchmarking and oracle testing.

pub mod topology;

use coalesce_core::{DisjointSet, ElementError};
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_workload;

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of elements in the universe.
    pub elements: usize,
    /// Number of union operations to emit.
    pub unions: usize,
    /// Query operations interleaved after each union (a random mix of find,
    /// connected, and component-size).
    pub queries_per_union: usize,
    /// Shape of the generated union pairs.
    pub topology: Topology,
}

/// Union-pair shapes a workload can be generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent uniform pairs; components evolve at random.
    Uniform,
    /// Adjacent-element pairs `(k, k+1)` emitted left to right; one
    /// component grows across the whole universe.
    Chain,
    /// Every pair touches element 0; a single hub component absorbs the
    /// rest one element at a time.
    Star,
    /// Pairs confined to fixed contiguous clusters of the universe, which
    /// bounds the component size any union sequence can reach.
    Clustered {
        /// Number of clusters the universe is split into.
        clusters: usize,
    },
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~1k elements, ~1.5k unions
    Small,
    /// ~10k elements, ~15k unions
    Medium,
    /// ~100k elements, ~150k unions
    Large,
    /// ~500k elements, ~750k unions
    XLarge,
}

impl SizeTier {
    /// Returns the default `WorkloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> WorkloadConfig {
        match self {
            SizeTier::Small => WorkloadConfig {
                seed,
                elements: 1_000,
                unions: 1_500,
                queries_per_union: 3,
                topology: Topology::Uniform,
            },
            SizeTier::Medium => WorkloadConfig {
                seed,
                elements: 10_000,
                unions: 15_000,
                queries_per_union: 2,
                topology: Topology::Uniform,
            },
            SizeTier::Large => WorkloadConfig {
                seed,
                elements: 100_000,
                unions: 150_000,
                queries_per_union: 2,
                topology: Topology::Uniform,
            },
            SizeTier::XLarge => WorkloadConfig {
                seed,
                elements: 500_000,
                unions: 750_000,
                queries_per_union: 1,
                topology: Topology::Uniform,
            },
        }
    }
}

/// One disjoint-set operation in a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Merge the components containing the two elements.
    Union(usize, usize),
    /// Resolve the element's representative.
    Find(usize),
    /// Ask whether the two elements share a component.
    Connected(usize, usize),
    /// Ask the size of the element's component.
    ComponentSize(usize),
}

/// A generated operation sequence over a fixed universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Universe size the operation ids are valid for.
    pub elements: usize,
    /// Operations in replay order.
    pub ops: Vec<Op>,
}

impl Workload {
    /// Replays every operation against a fresh [`DisjointSet`], discarding
    /// query answers, and returns the final structure.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::OutOfRange`] if any operation carries an id
    /// at or beyond `self.elements`; generated workloads never do.
    pub fn replay(&self) -> Result<DisjointSet, ElementError> {
        let mut ds = DisjointSet::new(self.elements);
        for op in &self.ops {
            match *op {
                Op::Union(a, b) => ds.union(a, b)?,
                Op::Find(a) => {
                    ds.find(a)?;
                }
                Op::Connected(a, b) => {
                    ds.connected(a, b)?;
                }
                Op::ComponentSize(a) => {
                    ds.component_size(a)?;
                }
            }
        }
        Ok(ds)
    }

    /// Returns the number of union operations in the workload.
    pub fn union_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Union(_, _)))
            .count()
    }
}

/// Generates a workload from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_workload(config: &WorkloadConfig) -> Workload {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_workload(config, &mut rng)
}
