//! Win/lose state machine fed by landing reports.

use crate::entity::PlatformKind;
use std::fmt;

/// Overall game state. `Won` and `Lost` are absorbing: once entered, no
/// further landing can change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Playing,
    Won,
    Lost,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }

    /// Fold one landing report into the outcome. Returns the successor state;
    /// terminal states ignore the report entirely.
    pub fn apply(self, landing: Option<PlatformKind>) -> Self {
        match (self, landing) {
            (GameOutcome::Playing, Some(PlatformKind::Win)) => GameOutcome::Won,
            (GameOutcome::Playing, Some(PlatformKind::Lose)) => GameOutcome::Lost,
            (GameOutcome::Playing, None) => GameOutcome::Playing,
            (terminal, _) => terminal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::Playing => "playing",
            GameOutcome::Won => "won",
            GameOutcome::Lost => "lost",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
