//! Random experiment generator and benchmark utilities for ketgraph.
//!
//! Provides deterministic generation of experiment graphs with a planted
//! perfect matching, for benchmarking and invariant testing of
//! `ketgraph-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_experiment, to_document};
