//! Union-pair topology strategies: uniform random pairs, chains, stars, and
//! cluster-confined pairs, plus the deterministic merge-tree sequence the
//! depth-sensitive benches replay.

use rand::Rng;
use rand::rngs::StdRng;

use super::{Op, Topology, Workload, WorkloadConfig};

/// Builds a complete workload from the generator configuration.
///
/// Emits `config.unions` union operations in topology order, each followed
/// by `config.queries_per_union` random query operations. Every emitted id
/// lies in `[0, config.elements)`.
pub fn build_workload(config: &WorkloadConfig, rng: &mut StdRng) -> Workload {
    let n = config.elements;
    let mut ops = Vec::new();
    if n == 0 {
        return Workload { elements: 0, ops };
    }

    ops.reserve(config.unions * (1 + config.queries_per_union));
    for i in 0..config.unions {
        let (a, b) = union_pair(rng, config.topology, n, i);
        ops.push(Op::Union(a, b));
        for _ in 0..config.queries_per_union {
            ops.push(random_query(rng, n));
        }
    }

    Workload { elements: n, ops }
}

/// Width of each contiguous cluster for [`Topology::Clustered`]; the last
/// cluster may be narrower when the universe does not divide evenly.
/// Cluster membership is `id / width`, which tests recompute to verify
/// confinement.
pub fn cluster_width(elements: usize, clusters: usize) -> usize {
    elements.div_ceil(clusters.max(1)).max(1)
}

/// Union sequence that merges blocks of doubling width bottom-up: adjacent
/// elements first, then adjacent pairs, then quads, and so on. Equal-sized
/// merges give union-by-size no shortcut, so each round sinks the absorbed
/// root one hop deeper and paths reach `O(log n)` before any find compresses
/// them. Emits exactly `elements - 1` pairs for a nonempty universe, each
/// uniting two previously-disjoint components.
pub fn merge_tree_pairs(elements: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut block = 1;
    while block < elements {
        let mut lo = 0;
        while lo + block < elements {
            pairs.push((lo, lo + block));
            lo += 2 * block;
        }
        block *= 2;
    }
    pairs
}

/// Picks the `i`-th union pair for the given topology. Universes smaller
/// than two elements only admit the self-pair.
fn union_pair(rng: &mut StdRng, topology: Topology, n: usize, i: usize) -> (usize, usize) {
    if n < 2 {
        return (0, 0);
    }
    match topology {
        Topology::Uniform => (rng.gen_range(0..n), rng.gen_range(0..n)),
        Topology::Chain => {
            let k = i % (n - 1);
            (k, k + 1)
        }
        Topology::Star => (0, rng.gen_range(1..n)),
        Topology::Clustered { clusters } => {
            let width = cluster_width(n, clusters);
            let a = rng.gen_range(0..n);
            let start = (a / width) * width;
            let end = (start + width).min(n);
            (a, rng.gen_range(start..end))
        }
    }
}

/// Picks one random query operation with in-range ids.
fn random_query(rng: &mut StdRng, n: usize) -> Op {
    match rng.gen_range(0..3) {
        0 => Op::Find(rng.gen_range(0..n)),
        1 => Op::Connected(rng.gen_range(0..n), rng.gen_range(0..n)),
        _ => Op::ComponentSize(rng.gen_range(0..n)),
    }
}
