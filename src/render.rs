//! Presenting game states to people.
//!
//! The engine never renders anything itself; drivers pick a [`Renderer`].

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use crate::game::{GameState, Phase};

/// Produces a human-viewable representation of a state.
pub trait Renderer {
    /// The rendered form.
    type Output;

    /// Renders `state`.
    fn render(&mut self, state: &GameState) -> Self::Output;
}

/// Renders a state as plain text, one line per collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, state: &GameState) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Table: {}", state.table_cards());
        for (player, (hand, taken)) in state
            .player_hands()
            .iter()
            .zip(state.taken_cards())
            .enumerate()
        {
            let _ = writeln!(out, "Player {player}");
            let _ = writeln!(out, "Hand: {hand}");
            let _ = writeln!(out, "Taken cards: {taken}");
            let score: alloc::vec::Vec<String> = taken
                .score()
                .iter()
                .map(alloc::string::ToString::to_string)
                .collect();
            let _ = writeln!(out, "Score: [{}]", score.join(", "));
        }
        match state.phase() {
            Phase::Capture { top_card, pending } => {
                let _ = writeln!(out, "Top card: {top_card}");
                let _ = writeln!(out, "Paired cards: {pending}");
            }
            Phase::End { winner } => {
                let _ = writeln!(out, "Winner: player {winner}");
            }
            Phase::Play | Phase::GoStop => {}
        }
        out
    }
}
