extern crate alloc;

use alloc::vec::Vec;

use super::{Action, GameState, Phase};

impl GameState {
    /// Go is only offered while the deck can still feed another turn.
    pub(super) fn go_stop_actions(&self) -> Vec<Action> {
        if self.deck.is_empty() {
            alloc::vec![Action::Stop]
        } else {
            alloc::vec![Action::Go, Action::Stop]
        }
    }

    /// Go passes the turn and returns to play; Stop ends the game with the
    /// current player as winner.
    pub(super) fn go_stop_successor(&self, action: &Action) -> Self {
        if *action == Action::Go {
            let mut state = self.successor(Phase::Play);
            state.advance_player();
            state
        } else {
            log::debug!("player {} stops and wins", self.current_player);
            self.successor(Phase::End {
                winner: self.current_player,
            })
        }
    }
}
