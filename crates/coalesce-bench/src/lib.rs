//! Workload generator and benchmark utilities for the coalesce structures.
//!
//! This crate provides deterministic generation of disjoint-set operation
//! sequences for benchmarking and oracle-based testing of `coalesce-core`.

pub mod correctness;
pub mod generator;

pub use correctness::ReferencePartition;
pub use generator::{Op, SizeTier, Topology, Workload, WorkloadConfig, generate_workload};
