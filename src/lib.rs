//! A Go-Stop rules engine with optional `no_std` support.
//!
//! The crate models the two-player Korean flower card game as a chain of
//! immutable [`GameState`] snapshots. A driver asks the current state for its
//! legal actions, lets an [`Agent`] choose one, and calls
//! [`GameState::generate_successor`] until the game ends.
//!
//! # Example
//!
//! ```
//! use gostop::{Agent, GameOptions, GameState, RandomAgent};
//!
//! let mut agent = RandomAgent::new(7);
//! let mut state = GameState::new_game(GameOptions::default(), 42).unwrap();
//!
//! while let Some(action) = agent.get_action(&state, &state.possible_actions()) {
//!     match state.generate_successor(&action).unwrap() {
//!         Some(next) => state = next,
//!         None => break,
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod agent;
pub mod card;
pub mod collection;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod render;
pub mod score;

// Re-export main types
#[cfg(feature = "std")]
pub use agent::HumanAgent;
pub use agent::{Agent, RandomAgent};
pub use card::{ALL_CARDS, Card, DECK_SIZE, Group, GroupSet, Month};
pub use collection::CardList;
pub use deck::Deck;
pub use error::{ActionError, CardError, DealError};
pub use game::{Action, GameState, Pairing, Phase, PlayCard};
pub use hand::{Hand, TableCards, TakenCards};
pub use options::GameOptions;
pub use render::{Renderer, TextRenderer};
pub use score::{Combination, total_points};
