//! Shared test helpers.

use gostop::{Card, CardList, Deck, GameOptions, GameState, Hand, Pairing, Phase, TableCards};

/// Builds a deck that yields `draws` in order.
pub fn deck_from_draws(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.iter().rev().copied())
}

/// Arranges a two-player play-phase state.
pub fn arrange(draws: &[Card], table: &[Card], hands: [&[Card]; 2]) -> GameState {
    arrange_with(GameOptions::default(), draws, table, hands)
}

/// Arranges a two-player play-phase state with custom options.
pub fn arrange_with(
    options: GameOptions,
    draws: &[Card],
    table: &[Card],
    hands: [&[Card]; 2],
) -> GameState {
    let table: TableCards = table.iter().copied().collect();
    let hands: Vec<Hand> = hands
        .iter()
        .map(|cards| cards.iter().copied().collect())
        .collect();
    GameState::arrange(options, deck_from_draws(draws), table, hands).unwrap()
}

/// Every card a state accounts for, including the drawn card and any cards
/// held by the pending play during the capture phase.
pub fn all_cards(state: &GameState) -> CardList {
    let mut cards: CardList = state.deck().cards().iter().copied().collect();
    cards.extend(state.table_cards().iter().copied());
    for hand in state.player_hands() {
        cards.extend(hand.iter().copied());
    }
    for pile in state.taken_cards() {
        cards.extend(pile.iter().copied());
    }
    if let Phase::Capture { top_card, pending } = state.phase() {
        cards.push(*top_card);
        match pending.pairing {
            Pairing::Unpaired => {}
            Pairing::Single(paired) => cards.extend([pending.card, paired]),
            Pairing::Stack(stack) => {
                cards.push(pending.card);
                cards.extend(stack);
            }
        }
    }
    cards
}

/// The full 48-card deck as a bag.
pub fn full_deck() -> CardList {
    Deck::new().cards().iter().copied().collect()
}
