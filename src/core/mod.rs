//! Core domain types for the guessing game
//!
//! Pure functions and value types with no I/O: guess feedback, accuracy scoring and the
//! alphabet status shown alongside the board.

mod accuracy;
mod alphabet;
mod feedback;

pub use accuracy::accuracy;
pub use alphabet::{ALPHABET, LetterStatus, alphabet_status};
pub use feedback::{Feedback, LetterMark};
