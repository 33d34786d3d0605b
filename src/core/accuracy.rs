//! Accuracy scoring across a finished game

/// Percentage of guessed letters that landed in their correct position
///
/// `word_length * guesses.len()` letters were guessed in total; every entry of
/// `correct_positions_history` contributes its length to the correct count. Returns `0.0`
/// when nothing was guessed.
///
/// # Examples
/// ```
/// use word_guess::core::accuracy;
///
/// let guesses = vec!["crate".to_string(), "crane".to_string()];
/// let history = vec![vec!['c', 'r', 'a', 'e'], vec!['c', 'r', 'a', 'n', 'e']];
/// assert!((accuracy(5, &guesses, &history) - 90.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn accuracy(
    word_length: usize,
    guesses: &[String],
    correct_positions_history: &[Vec<char>],
) -> f64 {
    let total_possible = word_length * guesses.len();
    if total_possible == 0 {
        return 0.0;
    }

    let total_correct: usize = correct_positions_history.iter().map(Vec::len).sum();
    100.0 * total_correct as f64 / total_possible as f64
}
