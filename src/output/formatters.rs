//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as a peg string: '●' per exact match, '○' per color-only
///
/// An all-miss feedback formats as "(none)".
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    if feedback.exact() == 0 && feedback.color_only() == 0 {
        return "(none)".to_string();
    }

    let mut pegs = String::new();
    for _ in 0..feedback.exact() {
        pegs.push('●');
    }
    for _ in 0..feedback.color_only() {
        pegs.push('○');
    }
    pegs
}

/// Create a horizontal bar string scaled to `max`
#[must_use]
pub fn create_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_exact_then_color_only() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1)), "●●○");
        assert_eq!(feedback_pegs(Feedback::new(0, 3)), "○○○");
        assert_eq!(feedback_pegs(Feedback::WIN), "●●●●");
    }

    #[test]
    fn pegs_all_miss() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0)), "(none)");
    }

    #[test]
    fn bar_empty() {
        assert_eq!(create_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn bar_full() {
        assert_eq!(create_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn bar_half() {
        assert_eq!(create_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn bar_overflow_clamped() {
        assert_eq!(create_bar(150.0, 100.0, 4), "████");
    }
}
