//! Statistical evaluation harness
//!
//! Runs many independent games per solver kind, fanned out over rayon
//! workers, and reduces the attempt counts to a single mean. Workers share
//! nothing; the only synchronization point is the final join.

use crate::core::CodeSpace;
use crate::game::GameSession;
use crate::solver::{Solver, SolverKind};
use rayon::prelude::*;

/// Evaluation run configuration
#[derive(Debug, Clone, Copy)]
pub struct EvalConfig {
    /// Total number of games to play
    pub runs: usize,
    /// Number of parallel workers
    pub workers: usize,
}

impl EvalConfig {
    /// Configuration with one worker per rayon thread
    #[must_use]
    pub fn new(runs: usize) -> Self {
        Self {
            runs,
            workers: rayon::current_num_threads(),
        }
    }

    /// Override the worker count (clamped to at least 1)
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = if workers == 0 { 1 } else { workers };
        self
    }
}

/// Aggregated result of one evaluation run
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub label: &'static str,
    pub runs: usize,
    pub mean_attempts: f64,
    pub aborted: usize,
}

/// Split a total run count into per-worker counts
///
/// Base share is `total / workers`; the remainder is distributed one each
/// to the first `total % workers` workers. Parts sum to exactly `total`
/// and differ from each other by at most 1.
///
/// # Panics
/// Panics if `workers` is zero.
#[must_use]
pub fn partition_runs(total: usize, workers: usize) -> Vec<usize> {
    assert!(workers >= 1, "worker count must be at least 1");
    let base = total / workers;
    let rest = total % workers;
    (0..workers).map(|i| base + usize::from(i < rest)).collect()
}

/// Evaluate one solver kind over `config.runs` independent games
///
/// Each worker plays its share sequentially with a fresh solver per game
/// (`reset()` between games) and a fresh random secret per game.
/// `on_progress` receives completed-game deltas as workers advance;
/// it is advisory only. Zero runs report a mean of 0 with no dispatch.
pub fn evaluate(
    kind: SolverKind,
    space: &CodeSpace,
    config: &EvalConfig,
    on_progress: impl Fn(usize) + Sync,
) -> EvaluationReport {
    if config.runs == 0 {
        return EvaluationReport {
            label: kind.label(),
            runs: 0,
            mean_attempts: 0.0,
            aborted: 0,
        };
    }

    let partitions = partition_runs(config.runs, config.workers.max(1));

    let chunks: Vec<Vec<Option<usize>>> = partitions
        .par_iter()
        .map(|&share| run_chunk(kind, space, share, &on_progress))
        .collect();

    let mut attempts: Vec<usize> = Vec::with_capacity(config.runs);
    let mut aborted = 0;
    for outcome in chunks.into_iter().flatten() {
        match outcome {
            Some(count) => attempts.push(count),
            None => aborted += 1,
        }
    }

    let mean_attempts = if attempts.is_empty() {
        0.0
    } else {
        attempts.iter().sum::<usize>() as f64 / attempts.len() as f64
    };

    EvaluationReport {
        label: kind.label(),
        runs: config.runs,
        mean_attempts,
        aborted,
    }
}

/// One worker's share: `runs` sequential games with fresh state each
fn run_chunk(
    kind: SolverKind,
    space: &CodeSpace,
    runs: usize,
    on_progress: &(impl Fn(usize) + Sync),
) -> Vec<Option<usize>> {
    let mut outcomes = Vec::with_capacity(runs);
    for _ in 0..runs {
        let mut solver = kind.build(space);
        solver.reset();
        let mut session = GameSession::with_random_secret(space);
        outcomes.push(session.play(&mut solver).attempts());
        on_progress(1);
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn partition_sums_to_total() {
        for total in [0, 1, 7, 100, 1001] {
            for workers in [1, 2, 3, 8, 16] {
                let parts = partition_runs(total, workers);
                assert_eq!(parts.len(), workers);
                assert_eq!(parts.iter().sum::<usize>(), total);
            }
        }
    }

    #[test]
    fn partition_parts_differ_by_at_most_one() {
        for total in [5, 17, 100] {
            for workers in [2, 3, 7, 13] {
                let parts = partition_runs(total, workers);
                let min = parts.iter().min().copied().unwrap();
                let max = parts.iter().max().copied().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn partition_remainder_goes_to_leading_workers() {
        assert_eq!(partition_runs(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(partition_runs(3, 5), vec![1, 1, 1, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "worker count must be at least 1")]
    fn partition_zero_workers_panics() {
        let _ = partition_runs(10, 0);
    }

    #[test]
    fn zero_runs_reports_zero_mean_without_dispatch() {
        let space = CodeSpace::standard();
        let config = EvalConfig::new(0).with_workers(4);
        let progress_events = AtomicUsize::new(0);

        let report = evaluate(SolverKind::ConsistencyFilter, &space, &config, |_| {
            progress_events.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(report.runs, 0);
        assert!((report.mean_attempts - 0.0).abs() < f64::EPSILON);
        assert_eq!(progress_events.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn evaluation_counts_every_game() {
        let space = CodeSpace::standard();
        let config = EvalConfig::new(10).with_workers(3);
        let completed = AtomicUsize::new(0);

        let report = evaluate(SolverKind::ConsistencyFilter, &space, &config, |delta| {
            completed.fetch_add(delta, Ordering::Relaxed);
        });

        assert_eq!(report.runs, 10);
        assert_eq!(report.aborted, 0);
        assert_eq!(completed.load(Ordering::Relaxed), 10);
        assert!(report.mean_attempts >= 1.0);
        assert!(report.mean_attempts <= 1296.0);
    }

    #[test]
    fn exhaustive_evaluation_runs() {
        let space = CodeSpace::standard();
        let config = EvalConfig::new(4).with_workers(2);

        let report = evaluate(SolverKind::Exhaustive, &space, &config, |_| {});

        assert_eq!(report.label, "exhaustive");
        assert!(report.mean_attempts >= 1.0);
    }

    #[test]
    fn worker_count_clamped() {
        let config = EvalConfig::new(5).with_workers(0);
        assert_eq!(config.workers, 1);
    }
}
