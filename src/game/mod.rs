//! Game engine and state machine.
//!
//! A [`GameState`] is an immutable snapshot. Transitions never mutate the
//! state they start from: [`GameState::generate_successor`] copies the
//! collections into a fresh state and applies the action to the copy.

extern crate alloc;

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::hand::{Hand, TableCards, TakenCards};
use crate::options::GameOptions;
use crate::score::{Combination, total_points};

mod action;
mod capture;
mod deal;
mod go_stop;
mod play;
pub mod state;

pub use action::{Action, Pairing, PlayCard};
pub use state::Phase;

/// A snapshot of a Go-Stop game.
///
/// Holds the draw pile, the table layout, one hand and one captured pile per
/// player, the player to act, and the current [`Phase`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Game options.
    options: GameOptions,
    /// Current phase.
    phase: Phase,
    /// Index of the player to act.
    current_player: usize,
    /// Remaining draw pile.
    deck: Deck,
    /// Face-up cards.
    table_cards: TableCards,
    /// Player hands, indexed by player.
    player_hands: Vec<Hand>,
    /// Captured piles, indexed by player.
    taken_cards: Vec<TakenCards>,
}

impl GameState {
    /// Creates a play-phase state from an explicit layout.
    ///
    /// Player 0 acts first and every captured pile starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidPlayerCount`] if the number of hands does
    /// not match `options.players` or is below two.
    pub fn arrange(
        options: GameOptions,
        deck: Deck,
        table_cards: TableCards,
        player_hands: Vec<Hand>,
    ) -> Result<Self, DealError> {
        let players = usize::from(options.players);
        if players < 2 || player_hands.len() != players {
            return Err(DealError::InvalidPlayerCount);
        }

        Ok(Self {
            options,
            phase: Phase::Play,
            current_player: 0,
            deck,
            table_cards,
            player_hands,
            taken_cards: alloc::vec![TakenCards::new(); players],
        })
    }

    /// Replaces a player's captured pile.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::PlayerNotFound`] if `player` is out of range.
    pub fn with_taken_cards(mut self, player: usize, taken: TakenCards) -> Result<Self, DealError> {
        let pile = self
            .taken_cards
            .get_mut(player)
            .ok_or(DealError::PlayerNotFound)?;
        *pile = taken;
        Ok(self)
    }

    /// Sets the player to act.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::PlayerNotFound`] if `player` is out of range.
    pub fn with_current_player(mut self, player: usize) -> Result<Self, DealError> {
        if player >= self.player_count() {
            return Err(DealError::PlayerNotFound);
        }
        self.current_player = player;
        Ok(self)
    }

    /// Returns a copy of this state in `phase`. The copy owns its collections,
    /// so changes to it never reach `self`.
    fn successor(&self, phase: Phase) -> Self {
        Self {
            phase,
            ..self.clone()
        }
    }

    /// Passes the turn to the next player.
    fn advance_player(&mut self) {
        self.current_player = (self.current_player + 1) % self.player_count();
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the index of the player to act.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_hands.len()
    }

    /// Returns the remaining draw pile.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the face-up table cards.
    #[must_use]
    pub const fn table_cards(&self) -> &TableCards {
        &self.table_cards
    }

    /// Returns every player's hand.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns every player's captured pile.
    #[must_use]
    pub fn taken_cards(&self) -> &[TakenCards] {
        &self.taken_cards
    }

    /// Returns the scoring combinations of a player's captured pile.
    ///
    /// Returns an empty score for an unknown player.
    #[must_use]
    pub fn score(&self, player: usize) -> Vec<Combination> {
        self.taken_cards
            .get(player)
            .map(TakenCards::score)
            .unwrap_or_default()
    }

    /// Returns the total points of a player's captured pile.
    #[must_use]
    pub fn points(&self, player: usize) -> u32 {
        total_points(&self.score(player))
    }

    /// Returns the winner, once the game has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::End { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns the legal actions for the player to act, without duplicates.
    #[must_use]
    pub fn possible_actions(&self) -> Vec<Action> {
        match &self.phase {
            Phase::Play => self.play_actions(),
            Phase::Capture { top_card, .. } => self.capture_actions(*top_card),
            Phase::GoStop => self.go_stop_actions(),
            Phase::End { .. } => Vec::new(),
        }
    }

    /// Returns the state that follows the current player taking `action`.
    ///
    /// Returns `Ok(None)` for a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] if `action` is not among
    /// [`possible_actions`](Self::possible_actions), and
    /// [`ActionError::EmptyDeck`] if a card must be drawn from an empty deck.
    /// `self` is unchanged either way.
    pub fn generate_successor(&self, action: &Action) -> Result<Option<Self>, ActionError> {
        if self.is_terminal() {
            return Ok(None);
        }

        if !self.possible_actions().contains(action) {
            log::debug!("player {} tried illegal action {action}", self.current_player);
            return Err(ActionError::IllegalAction);
        }

        log::trace!("player {} takes {action}", self.current_player);

        let next = match (&self.phase, action) {
            (Phase::Play, Action::Play(play)) => self.play_successor(play)?,
            (Phase::Capture { top_card, pending }, Action::Play(play)) => {
                self.capture_successor(*top_card, pending, play)?
            }
            (Phase::GoStop, Action::Go | Action::Stop) => self.go_stop_successor(action),
            _ => return Err(ActionError::IllegalAction),
        };

        log::debug!(
            "phase {:?} -> {:?}, player {} to act",
            self.phase,
            next.phase,
            next.current_player
        );

        Ok(Some(next))
    }

    /// Returns the outcome for `player`: 1 for the winner, 0 for a loser,
    /// 0.5 for a non-terminal state with no legal actions, and 0 otherwise.
    #[must_use]
    pub fn get_result(&self, player: usize) -> f64 {
        match self.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => 0.0,
            None if self.possible_actions().is_empty() => 0.5,
            None => 0.0,
        }
    }
}
