//! Error types for game operations.

use thiserror::Error;

/// Errors raised by card collections and the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card is not in the collection.
    #[error("card not found in collection")]
    NotFound,
    /// The collection is empty.
    #[error("collection is empty")]
    Empty,
}

/// Errors that can occur while dealing or arranging a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than two players, or hands that do not match the player count.
    #[error("invalid player count")]
    InvalidPlayerCount,
    /// The deal needs more cards than the deck holds.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur while generating a successor state.
///
/// These are driver protocol violations; the state that raised one is left
/// unchanged and remains valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not one of the state's legal actions.
    #[error("action is not legal in this state")]
    IllegalAction,
    /// No cards left in the deck to draw.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// A collection operation failed.
    #[error(transparent)]
    Card(#[from] CardError),
}
