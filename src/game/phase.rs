//! Game phase and score tracking.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single game.
///
/// `Won` and `Over` are terminal: only a new game leaves them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game loaded for the current size.
    #[default]
    NotStarted,
    /// Moves are accepted.
    Started,
    /// A merge reached the win target.
    Won,
    /// The grid is full and no move can change it.
    Over,
}

impl GamePhase {
    /// Does this phase accept moves?
    #[must_use]
    pub const fn accepts_moves(self) -> bool {
        matches!(self, GamePhase::Started)
    }

    /// Is this a terminal phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Over)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::NotStarted => "not started",
            GamePhase::Started => "started",
            GamePhase::Won => "won",
            GamePhase::Over => "over",
        };
        f.write_str(name)
    }
}

/// Current and best score.
///
/// `best_score` never decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub best_score: u64,
}

impl ScoreState {
    /// Add merge points, raising the best score if exceeded.
    ///
    /// Returns true if the best score increased.
    pub fn add(&mut self, points: u64) -> bool {
        self.score += points;
        self.raise_best(self.score)
    }

    /// Raise the best score to at least `candidate`.
    ///
    /// Returns true if it increased.
    pub fn raise_best(&mut self, candidate: u64) -> bool {
        if candidate > self.best_score {
            self.best_score = candidate;
            true
        } else {
            false
        }
    }

    /// Reset the current score, keeping the best.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_flags() {
        assert!(GamePhase::Started.accepts_moves());
        assert!(!GamePhase::NotStarted.accepts_moves());
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Over.is_terminal());
        assert!(!GamePhase::Started.is_terminal());
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }

    #[test]
    fn test_score_add_raises_best() {
        let mut scores = ScoreState::default();
        assert!(scores.add(8));
        assert_eq!(scores.best_score, 8);

        scores.reset();
        assert!(!scores.add(4));
        assert_eq!(scores.score, 4);
        assert_eq!(scores.best_score, 8);
    }

    #[test]
    fn test_raise_best_never_lowers() {
        let mut scores = ScoreState { score: 0, best_score: 100 };
        assert!(!scores.raise_best(50));
        assert_eq!(scores.best_score, 100);
    }
}
