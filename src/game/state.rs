//! Game phase types.

use crate::card::Card;

use super::action::PlayCard;

/// The phase of a game state, with any phase-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The current player plays a card from hand.
    Play,
    /// The card drawn from the deck is matched against the table and the
    /// turn's captures are resolved.
    Capture {
        /// Card drawn from the deck this turn.
        top_card: Card,
        /// The play made from hand this turn, captured when this phase resolves.
        pending: PlayCard,
    },
    /// The current player has reached the score threshold and chooses to go
    /// on or stop.
    GoStop,
    /// The game is over.
    End {
        /// Index of the winning player.
        winner: usize,
    },
}

impl Phase {
    /// Returns whether this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. })
    }
}
