extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;

use super::{Action, GameState, Phase, PlayCard};

impl GameState {
    /// One action per hand card and distinct paired table card.
    pub(super) fn play_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for card in &self.player_hands[self.current_player] {
            for play in PlayCard::options(*card, &self.table_cards) {
                let action = Action::Play(play);
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Plays a card from hand and draws the top card of the deck.
    ///
    /// Paired table cards leave the table now but are only captured once the
    /// capture phase resolves.
    pub(super) fn play_successor(&self, play: &PlayCard) -> Result<Self, ActionError> {
        if self.deck.is_empty() {
            return Err(ActionError::EmptyDeck);
        }

        let mut state = self.successor(Phase::Play);
        let top_card = state.deck.pop()?;
        state.phase = Phase::Capture {
            top_card,
            pending: *play,
        };
        state.player_hands[state.current_player].remove(&play.card)?;
        play.resolve_table(&mut state.table_cards)?;

        Ok(state)
    }
}
