//! Actions a player can take.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::CardError;
use crate::hand::TableCards;

/// How a played card pairs with the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pairing {
    /// No table card shares the month; the card is laid on the table.
    Unpaired,
    /// The card pairs with one table card of its month.
    Single(Card),
    /// Three table cards share the month; all four are captured together.
    Stack([Card; 3]),
}

/// A card played from hand or drawn from the deck, with its pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayCard {
    /// The card being played.
    pub card: Card,
    /// The table card(s) it pairs with.
    pub pairing: Pairing,
}

impl PlayCard {
    /// A play that matches nothing on the table.
    #[must_use]
    pub const fn unpaired(card: Card) -> Self {
        Self {
            card,
            pairing: Pairing::Unpaired,
        }
    }

    /// A play paired with a single table card.
    #[must_use]
    pub const fn paired(card: Card, paired_card: Card) -> Self {
        Self {
            card,
            pairing: Pairing::Single(paired_card),
        }
    }

    /// A play that takes a stack of three table cards.
    #[must_use]
    pub const fn stack(card: Card, stack: [Card; 3]) -> Self {
        Self {
            card,
            pairing: Pairing::Stack(stack),
        }
    }

    /// Lists the ways `card` can be played against `table`, one per distinct
    /// paired table card.
    pub(crate) fn options(card: Card, table: &TableCards) -> Vec<Self> {
        let matches = table.get_paired_cards(&card);
        match matches.as_slice() {
            [] => alloc::vec![Self::unpaired(card)],
            &[a, b, c] => alloc::vec![Self::stack(card, [a, b, c])],
            _ => {
                let mut options: Vec<Self> = Vec::with_capacity(matches.len());
                for paired in matches {
                    let option = Self::paired(card, paired);
                    if !options.contains(&option) {
                        options.push(option);
                    }
                }
                options
            }
        }
    }

    /// Takes the paired cards off the table, or lays an unpaired card on it.
    pub(crate) fn resolve_table(&self, table: &mut TableCards) -> Result<(), CardError> {
        match &self.pairing {
            Pairing::Unpaired => table.push(self.card),
            Pairing::Single(paired) => {
                table.remove(paired)?;
            }
            Pairing::Stack(stack) => {
                for paired in stack {
                    table.remove(paired)?;
                }
            }
        }
        Ok(())
    }

    /// Moves the played card and its pairs into `pile`. Unpaired plays capture
    /// nothing.
    pub(crate) fn capture_into(&self, pile: &mut impl Extend<Card>) {
        match &self.pairing {
            Pairing::Unpaired => {}
            Pairing::Single(paired) => pile.extend([self.card, *paired]),
            Pairing::Stack(stack) => {
                pile.extend(core::iter::once(self.card).chain(stack.iter().copied()));
            }
        }
    }
}

impl fmt::Display for PlayCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pairing {
            Pairing::Unpaired => write!(f, "{}", self.card),
            Pairing::Single(paired) => write!(f, "{}, {}", self.card, paired),
            Pairing::Stack([a, b, c]) => write!(f, "{}, {}, {}, {}", self.card, a, b, c),
        }
    }
}

/// An action offered by a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Play a card (from hand in the play phase, the drawn card in the
    /// capture phase).
    Play(PlayCard),
    /// Keep playing after reaching the score threshold.
    Go,
    /// End the game and take the win.
    Stop,
}

impl From<PlayCard> for Action {
    fn from(play: PlayCard) -> Self {
        Self::Play(play)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play(play) => fmt::Display::fmt(play, f),
            Self::Go => f.write_str("Go"),
            Self::Stop => f.write_str("Stop"),
        }
    }
}
