//! Evaluation sweep command
//!
//! Evaluates one or more solver kinds in sequence, each with its own
//! labelled progress bar, printing per-solver means as they complete.

use crate::core::CodeSpace;
use crate::eval::{EvalConfig, EvaluationReport, evaluate};
use crate::output::print_report_line;
use crate::solver::SolverKind;
use indicatif::{ProgressBar, ProgressStyle};

/// Run the evaluation for each kind and collect the reports
pub fn run_eval_sweep(
    kinds: &[SolverKind],
    space: &CodeSpace,
    runs: usize,
    workers: usize,
) -> Vec<EvaluationReport> {
    let config = EvalConfig::new(runs).with_workers(workers);
    let mut reports = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let pb = ProgressBar::new(runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:>12} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_prefix(kind.label());

        let report = evaluate(kind, space, &config, |delta| pb.inc(delta as u64));

        pb.finish();
        print_report_line(&report);
        reports.push(report);
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_returns_one_report_per_kind() {
        let space = CodeSpace::standard();
        let kinds = [SolverKind::Exhaustive, SolverKind::ConsistencyFilter];

        let reports = run_eval_sweep(&kinds, &space, 4, 2);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, "exhaustive");
        assert_eq!(reports[1].label, "consistency");
        for report in &reports {
            assert_eq!(report.runs, 4);
            assert!(report.mean_attempts >= 1.0);
        }
    }

    #[test]
    fn sweep_with_zero_runs_is_empty_work() {
        let space = CodeSpace::standard();
        let reports = run_eval_sweep(&[SolverKind::ConsistencyFilter], &space, 0, 2);

        assert_eq!(reports.len(), 1);
        assert!((reports[0].mean_attempts - 0.0).abs() < f64::EPSILON);
    }
}
