extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{ALL_CARDS, Card};
use crate::collection::CardList;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{Hand, TableCards};
use crate::options::GameOptions;

use super::{GameState, Phase};

fn deal_into(deck: &mut Deck, count: u8, pile: &mut CardList) -> Result<(), DealError> {
    for _ in 0..count {
        let card = deck.pop().map_err(|_| DealError::NotEnoughCards)?;
        pile.push(card);
    }
    Ok(())
}

impl GameState {
    /// Shuffles a fresh deck with the given seed and deals a new game.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::{GameOptions, GameState};
    ///
    /// let state = GameState::new_game(GameOptions::default(), 42).unwrap();
    /// assert_eq!(state.deck().len(), 34);
    /// assert_eq!(state.table_cards().len(), 4);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are configured or the deal
    /// needs more cards than the deck holds.
    pub fn new_game(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new_game_with_rng(options, &mut rng)
    }

    /// Shuffles a fresh deck with `rng` and deals a new game.
    ///
    /// Each deal round gives every player `hand_size` cards, then lays
    /// `table_size` cards face up.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are configured or the deal
    /// needs more cards than the deck holds.
    pub fn new_game_with_rng<R: Rng + ?Sized>(
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, DealError> {
        let players = usize::from(options.players);
        if players < 2 {
            return Err(DealError::InvalidPlayerCount);
        }
        if !options.fits_deck() {
            return Err(DealError::NotEnoughCards);
        }

        let mut deck = Deck::new();
        deck.shuffle(rng);

        let mut player_hands = alloc::vec![Hand::new(); players];
        let mut table_cards = TableCards::new();
        for _ in 0..options.deal_rounds {
            for hand in &mut player_hands {
                deal_into(&mut deck, options.hand_size, hand)?;
            }
            deal_into(&mut deck, options.table_size, &mut table_cards)?;
        }

        log::debug!(
            "dealt {players} hands of {} cards, {} on the table, {} left in the deck",
            player_hands[0].len(),
            table_cards.len(),
            deck.len()
        );

        Self::arrange(options, deck, table_cards, player_hands)
    }

    /// Returns a copy of the state with the information hidden from
    /// `observer` redealt at random.
    ///
    /// The observer sees their own hand, the table, every captured pile, and
    /// in the capture phase the drawn card and the pending play. Every other
    /// card is shuffled and dealt back into the other players' hands and the
    /// deck, keeping each of their sizes.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::PlayerNotFound`] if `observer` is out of range and
    /// [`DealError::NotEnoughCards`] if the hidden slots outnumber the unseen
    /// cards.
    pub fn copy_and_randomise<R: Rng + ?Sized>(
        &self,
        observer: usize,
        rng: &mut R,
    ) -> Result<Self, DealError> {
        let observer_hand = self
            .player_hands
            .get(observer)
            .ok_or(DealError::PlayerNotFound)?;

        let mut seen = observer_hand.as_list().clone();
        seen.extend(self.table_cards.iter().copied());
        for pile in &self.taken_cards {
            seen.extend(pile.iter().copied());
        }
        if let Phase::Capture { top_card, pending } = &self.phase {
            seen.push(*top_card);
            pending.capture_into(&mut seen);
        }

        let mut remaining = seen.counts();
        let mut unseen: Vec<Card> = Vec::with_capacity(ALL_CARDS.len());
        for card in ALL_CARDS {
            match remaining.get_mut(&card) {
                Some(count) if *count > 0 => *count -= 1,
                _ => unseen.push(card),
            }
        }
        unseen.shuffle(rng);

        let mut unseen = unseen.into_iter();
        let mut state = self.clone();
        for (player, hand) in state.player_hands.iter_mut().enumerate() {
            if player == observer {
                continue;
            }
            let size = hand.len();
            let dealt: Hand = unseen.by_ref().take(size).collect();
            if dealt.len() != size {
                return Err(DealError::NotEnoughCards);
            }
            *hand = dealt;
        }

        let deck_size = self.deck.len();
        let deck: Vec<Card> = unseen.by_ref().take(deck_size).collect();
        if deck.len() != deck_size {
            return Err(DealError::NotEnoughCards);
        }
        state.deck = Deck::from_cards(deck);

        log::trace!("randomised hidden cards for observer {observer}");

        Ok(state)
    }
}
