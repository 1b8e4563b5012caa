//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_evaluation_chart, print_report_line};
pub use formatters::{create_bar, feedback_pegs};
