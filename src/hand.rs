//! Hands, the table layout, and captured piles.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::card::{
    BUSH_CLOVER_RED, BUSH_WARBLER, CHERRY_RED_POEM, CHRYSANTHEMUM_BLUE_POEM, CUCKOO, Card, GEESE,
    Group, IRIS_RED, MAPLE_BLUE_POEM, PEONY_BLUE_POEM, PINE_RED_POEM, PLUM_RED_POEM, RAIN,
    WISTERIA_RED,
};
use crate::collection::{CardList, card_collection};
use crate::score::Combination;

const GODORI: [Card; 3] = [BUSH_WARBLER, CUCKOO, GEESE];
const RED_POEM_RIBBONS: [Card; 3] = [PINE_RED_POEM, PLUM_RED_POEM, CHERRY_RED_POEM];
const RED_RIBBONS: [Card; 3] = [WISTERIA_RED, IRIS_RED, BUSH_CLOVER_RED];
const BLUE_POEM_RIBBONS: [Card; 3] = [PEONY_BLUE_POEM, CHRYSANTHEMUM_BLUE_POEM, MAPLE_BLUE_POEM];

card_collection!(
    /// The cards a player holds.
    Hand
);

card_collection!(
    /// The face-up cards in the table layout.
    TableCards
);

card_collection!(
    /// The cards a player has captured.
    TakenCards
);

impl Hand {
    /// Scores the in-hand bonuses: one point for each month held three or
    /// four times, in month order.
    #[must_use]
    pub fn score(&self) -> Vec<Combination> {
        self.split_by_month()
            .iter()
            .filter_map(|bucket| match bucket.len() {
                3 => Some(Combination::new("Three cards of a month", 1)),
                4 => Some(Combination::new("Four cards of a month", 1)),
                _ => None,
            })
            .collect()
    }
}

impl TableCards {
    /// Returns every table card in the same month as `card`.
    #[must_use]
    pub fn get_paired_cards(&self, card: &Card) -> Vec<Card> {
        self.iter()
            .filter(|c| c.month() == card.month())
            .copied()
            .collect()
    }
}

impl TakenCards {
    fn holds_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|card| self.contains(card))
    }

    /// Whether the pile's ribbons are exactly `trio`, no more and no fewer.
    fn ribbons_are(&self, trio: [Card; 3]) -> bool {
        let ribbons: CardList = self
            .iter()
            .copied()
            .filter(|card| card.is(Group::Ribbon))
            .collect();
        ribbons == CardList::from(trio)
    }

    /// Scores the captured pile.
    ///
    /// Every rule is evaluated against the whole pile and every matching
    /// combination is returned, in this order: brights, animals, godori,
    /// ribbons, the three ribbon trios, junk.
    #[must_use]
    pub fn score(&self) -> Vec<Combination> {
        let mut score = Vec::new();

        let brights = self.count_group(Group::Bright);
        match brights {
            5 => score.push(Combination::new("Five brights", 15)),
            4 => score.push(Combination::new("Four brights", 4)),
            3 if self.contains(&RAIN) => {
                score.push(Combination::new("Three brights with rain", 2));
            }
            3 => score.push(Combination::new("Three brights without rain", 3)),
            _ => {}
        }

        let animals = self.count_group(Group::Animal);
        if animals >= 5 {
            score.push(Combination::new(
                format!("{animals} animals"),
                animals as u32 - 4,
            ));
        }
        if self.holds_all(&GODORI) {
            score.push(Combination::new("Godori", 5));
        }

        let ribbons = self.count_group(Group::Ribbon);
        if ribbons >= 5 {
            score.push(Combination::new(
                format!("{ribbons} ribbons"),
                ribbons as u32 - 4,
            ));
        }
        if self.ribbons_are(RED_POEM_RIBBONS) {
            score.push(Combination::new("Three red ribbons with poem", 3));
        }
        if self.ribbons_are(RED_RIBBONS) {
            score.push(Combination::new("Three red ribbons", 3));
        }
        if self.ribbons_are(BLUE_POEM_RIBBONS) {
            score.push(Combination::new("Three blue ribbons with poem", 3));
        }

        let junk = self.count_group(Group::Junk);
        if junk >= 10 {
            score.push(Combination::new(
                format!("{junk} junk cards"),
                junk as u32 - 9,
            ));
        }

        score
    }
}
