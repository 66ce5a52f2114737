use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("total correct ({correct}) exceeds total attempts ({attempts})")]
    CorrectExceedsAttempts { correct: u32, attempts: u32 },

    #[error("current streak ({current}) exceeds best streak ({best})")]
    StreakExceedsBest { current: u32, best: u32 },
}

/// Running answer tally: consecutive-correct streak, the best streak the
/// record has ever reached, and the lifetime correct/attempt counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    current_streak: u32,
    best_streak: u32,
    total_correct: u32,
    total_attempts: u32,
}

impl ScoreBoard {
    /// A zeroed board, the state of a fresh install.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a board from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if the counters violate the invariants
    /// `total_correct <= total_attempts` or `current_streak <= best_streak`.
    pub fn from_persisted(
        current_streak: u32,
        best_streak: u32,
        total_correct: u32,
        total_attempts: u32,
    ) -> Result<Self, ScoreError> {
        if total_correct > total_attempts {
            return Err(ScoreError::CorrectExceedsAttempts {
                correct: total_correct,
                attempts: total_attempts,
            });
        }
        if current_streak > best_streak {
            return Err(ScoreError::StreakExceedsBest {
                current: current_streak,
                best: best_streak,
            });
        }

        Ok(Self {
            current_streak,
            best_streak,
            total_correct,
            total_attempts,
        })
    }

    /// The board after one more answer. Pure; the receiver is unchanged.
    #[must_use]
    pub fn record(&self, was_correct: bool) -> Self {
        let mut next = *self;
        if was_correct {
            next.current_streak = next.current_streak.saturating_add(1);
            next.total_correct = next.total_correct.saturating_add(1);
            next.best_streak = next.best_streak.max(next.current_streak);
        } else {
            next.current_streak = 0;
        }
        next.total_attempts = next.total_attempts.saturating_add(1);
        next
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    /// Correct answers as a rounded percentage of attempts; 0 with no attempts.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        let scaled = u64::from(self.total_correct) * 100 + u64::from(self.total_attempts) / 2;
        u32::try_from(scaled / u64::from(self.total_attempts)).unwrap_or(100)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(answers: &[bool]) -> ScoreBoard {
        answers
            .iter()
            .fold(ScoreBoard::new(), |board, &correct| board.record(correct))
    }

    #[test]
    fn counters_track_answer_sequence() {
        let answers = [true, false, true, true, false, true];
        let board = replay(&answers);

        assert_eq!(board.total_attempts(), answers.len() as u32);
        assert_eq!(
            board.total_correct(),
            answers.iter().filter(|&&c| c).count() as u32
        );
    }

    #[test]
    fn streak_is_trailing_run_and_best_is_max_run() {
        let answers = [true, true, false, true, true, true, false, true];
        let board = replay(&answers);

        // Trailing run of `true` values.
        assert_eq!(board.current_streak(), 1);
        // Longest run seen over any prefix.
        assert_eq!(board.best_streak(), 3);
    }

    #[test]
    fn correct_correct_incorrect_correct_scenario() {
        let board = replay(&[true, true, false, true]);

        assert_eq!(board.current_streak(), 1);
        assert_eq!(board.best_streak(), 2);
        assert_eq!(board.total_correct(), 3);
        assert_eq!(board.total_attempts(), 4);
    }

    #[test]
    fn incorrect_resets_streak_but_keeps_best() {
        let board = replay(&[true, true, true, false]);
        assert_eq!(board.current_streak(), 0);
        assert_eq!(board.best_streak(), 3);
    }

    #[test]
    fn rehydration_rejects_impossible_counters() {
        let err = ScoreBoard::from_persisted(0, 0, 5, 3).unwrap_err();
        assert!(matches!(err, ScoreError::CorrectExceedsAttempts { .. }));

        let err = ScoreBoard::from_persisted(4, 2, 1, 6).unwrap_err();
        assert!(matches!(err, ScoreError::StreakExceedsBest { .. }));
    }

    #[test]
    fn rehydration_accepts_valid_counters() {
        let board = ScoreBoard::from_persisted(2, 5, 8, 13).unwrap();
        assert_eq!(board.current_streak(), 2);
        assert_eq!(board.best_streak(), 5);
        assert_eq!(board.total_correct(), 8);
        assert_eq!(board.total_attempts(), 13);
    }

    #[test]
    fn accuracy_rounds_to_nearest_percent() {
        assert_eq!(ScoreBoard::new().accuracy_percent(), 0);
        assert_eq!(replay(&[true, true, false]).accuracy_percent(), 67);
        assert_eq!(replay(&[true, false]).accuracy_percent(), 50);
        assert_eq!(replay(&[true]).accuracy_percent(), 100);
    }
}
