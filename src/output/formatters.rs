//! Formatting utilities for terminal output

/// Join letters as "a, b, c"
#[must_use]
pub fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an accuracy percentage as a bar
#[must_use]
pub fn accuracy_bar(accuracy: f64, width: usize) -> String {
    create_progress_bar(accuracy, 100.0, width)
}

/// Format an accuracy percentage with one decimal, e.g. "46.7%"
#[must_use]
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{accuracy:.1}%")
}
