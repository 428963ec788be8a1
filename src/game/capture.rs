extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;

use super::{Action, GameState, Phase, PlayCard};

impl GameState {
    /// The pairing options for the drawn card.
    pub(super) fn capture_actions(&self, top_card: Card) -> Vec<Action> {
        PlayCard::options(top_card, &self.table_cards)
            .into_iter()
            .map(Action::Play)
            .collect()
    }

    /// Captures the turn's hand play, then resolves the drawn card.
    ///
    /// A player whose captured pile reaches the threshold moves to the
    /// go/stop decision; otherwise the turn passes.
    pub(super) fn capture_successor(
        &self,
        top_card: Card,
        pending: &PlayCard,
        play: &PlayCard,
    ) -> Result<Self, ActionError> {
        debug_assert_eq!(play.card, top_card);

        let mut state = self.successor(Phase::Play);
        let player = state.current_player;

        pending.capture_into(&mut state.taken_cards[player]);

        play.resolve_table(&mut state.table_cards)?;
        play.capture_into(&mut state.taken_cards[player]);

        let points = state.points(player);
        if points >= self.options.go_threshold {
            log::debug!("player {player} reached {points} points");
            state.phase = Phase::GoStop;
        } else {
            state.advance_player();
        }

        Ok(state)
    }
}
