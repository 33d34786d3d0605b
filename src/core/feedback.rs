//! Guess feedback calculation
//!
//! Letters of a guess are classified against the target in a single left-to-right pass that
//! consumes target letters as they are credited, so a letter never earns more signals than it
//! has occurrences in the target.

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    /// Same letter at the same index of the target
    Correct,
    /// Letter still available elsewhere in the target
    Misplaced,
    /// Letter absent, or all its occurrences already credited
    Absent,
}

impl LetterMark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess against the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    correct_positions: Vec<char>,
    wrong_positions: Vec<char>,
    marks: Vec<LetterMark>,
}

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Copy the target letters into a scratch buffer of remaining letters
    /// 2. For each guessed letter at index `i`:
    ///    - equal to `remaining[i]`: correct position, consume `remaining[i]`
    ///    - otherwise present in `remaining`: wrong position, consume its *first* occurrence
    ///    - otherwise: absent
    /// 3. Both letter lists keep the guess's left-to-right order
    ///
    /// Guessed letters past the end of the target are not evaluated and get no mark.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Feedback;
    ///
    /// let feedback = Feedback::evaluate("robot", "boost");
    /// assert_eq!(feedback.correct_positions(), &['o', 't']);
    /// assert_eq!(feedback.wrong_positions(), &['b', 'o']);
    /// ```
    #[must_use]
    pub fn evaluate(target: &str, guess: &str) -> Self {
        let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
        let mut feedback = Self::default();

        for (i, letter) in guess.chars().enumerate().take(remaining.len()) {
            let mark = if remaining[i] == Some(letter) {
                remaining[i] = None;
                feedback.correct_positions.push(letter);
                LetterMark::Correct
            } else if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                *slot = None;
                feedback.wrong_positions.push(letter);
                LetterMark::Misplaced
            } else {
                LetterMark::Absent
            };
            feedback.marks.push(mark);
        }

        feedback
    }

    /// Letters found at their exact position, in guess order
    #[must_use]
    pub fn correct_positions(&self) -> &[char] {
        &self.correct_positions
    }

    /// Letters present in the target at another position, in guess order
    #[must_use]
    pub fn wrong_positions(&self) -> &[char] {
        &self.wrong_positions
    }

    /// Per-position marks for the evaluated letters of the guess
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// True when nothing in the guess matched the target
    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.correct_positions.is_empty() && self.wrong_positions.is_empty()
    }

    /// Convert the marks to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|mark| mark.emoji()).collect()
    }

    /// Split into the correct and wrong position lists
    #[must_use]
    pub fn into_positions(self) -> (Vec<char>, Vec<char>) {
        (self.correct_positions, self.wrong_positions)
    }
}
