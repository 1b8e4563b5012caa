//! Evaluation report rendering
//!
//! Terminal replacement for the bar-chart collaborator: one horizontal bar
//! per solver, mean attempt count beside it.

use super::formatters::create_bar;
use crate::eval::EvaluationReport;
use colored::Colorize;

/// Print the comparison chart for a finished evaluation sweep
pub fn print_evaluation_chart(reports: &[EvaluationReport], runs: usize) {
    if reports.is_empty() {
        return;
    }

    println!("\n{}", "═".repeat(70));
    println!(" Solver Evaluation — {runs} runs each ");
    println!("{}", "═".repeat(70));

    // Scale bars to the worst performer so differences stay visible
    let max_mean = reports
        .iter()
        .map(|r| r.mean_attempts)
        .fold(1.0_f64, f64::max);

    println!();
    for report in reports {
        let bar = create_bar(report.mean_attempts, max_mean, 40);
        println!(
            "  {:>12}  {} {}",
            report.label.bright_cyan(),
            bar.green(),
            format!("{:.2}", report.mean_attempts).bright_yellow().bold()
        );
        if report.aborted > 0 {
            println!("  {:>12}  {} games aborted", "", report.aborted);
        }
    }

    println!(
        "\n  {}",
        "Reference: 1296 possible codes (exhaustive worst case)".bright_black()
    );
    println!("{}", "═".repeat(70));
}

/// Print one solver's result line as it completes
pub fn print_report_line(report: &EvaluationReport) {
    println!(
        "  {}: mean {} attempts over {} runs",
        report.label.bright_cyan(),
        format!("{:.2}", report.mean_attempts).bright_yellow().bold(),
        report.runs
    );
}
