//! Parallel solver evaluation

mod harness;

pub use harness::{EvalConfig, EvaluationReport, evaluate, partition_runs};
