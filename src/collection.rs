//! Ordered card multisets.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::slice;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Group, Month};
use crate::error::CardError;

/// An ordered multiset of cards.
///
/// Cards keep their insertion order, but equality and hashing treat the list
/// as a bag: the same cards in any order compare equal, while duplicates
/// count.
#[derive(Debug, Clone, Default)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotFound`] if no equal card is present.
    pub fn remove(&mut self, card: &Card) -> Result<Card, CardError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(CardError::NotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Empty`] if the list is empty.
    pub fn pop(&mut self) -> Result<Card, CardError> {
        self.cards.pop().ok_or(CardError::Empty)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether an equal card is present.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns how many cards belong to `group`.
    #[must_use]
    pub fn count_group(&self, group: Group) -> usize {
        self.cards.iter().filter(|card| card.is(group)).count()
    }

    /// Returns how many cards fall in `month`.
    #[must_use]
    pub fn count_month(&self, month: Month) -> usize {
        self.cards.iter().filter(|card| card.month() == month).count()
    }

    /// Splits the cards into twelve buckets, indexed by [`Month::index`].
    #[must_use]
    pub fn split_by_month(&self) -> [Vec<Card>; 12] {
        let mut buckets: [Vec<Card>; 12] = Default::default();
        for card in &self.cards {
            buckets[card.month().index()].push(*card);
        }
        buckets
    }

    /// Splits the cards into five buckets, indexed by [`Group::index`].
    ///
    /// A card with two groups lands in both buckets.
    #[must_use]
    pub fn split_by_group(&self) -> [Vec<Card>; 5] {
        let mut buckets: [Vec<Card>; 5] = Default::default();
        for card in &self.cards {
            for group in card.groups().iter() {
                buckets[group.index()].push(*card);
            }
        }
        buckets
    }

    /// Counts the cards by identity.
    #[must_use]
    pub fn counts(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    fn sorted_keys(&self) -> Vec<(u8, u8)> {
        let mut keys: Vec<(u8, u8)> = self.cards.iter().map(Card::key).collect();
        keys.sort_unstable();
        keys
    }
}

impl PartialEq for CardList {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len() && self.counts() == other.counts()
    }
}

impl Eq for CardList {}

impl Hash for CardList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_keys().hash(state);
    }
}

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<const N: usize> From<[Card; N]> for CardList {
    fn from(cards: [Card; N]) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for CardList {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardList {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CardList {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for CardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Declares a newtype over [`CardList`] that dereferences to it and shares its
/// bag semantics.
macro_rules! card_collection {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(crate::collection::CardList);

        impl $name {
            /// Creates an empty collection.
            #[must_use]
            pub const fn new() -> Self {
                Self(crate::collection::CardList::new())
            }

            /// Returns the underlying card list.
            #[must_use]
            pub const fn as_list(&self) -> &crate::collection::CardList {
                &self.0
            }
        }

        impl core::ops::Deref for $name {
            type Target = crate::collection::CardList;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<alloc::vec::Vec<crate::card::Card>> for $name {
            fn from(cards: alloc::vec::Vec<crate::card::Card>) -> Self {
                Self(cards.into())
            }
        }

        impl<const N: usize> From<[crate::card::Card; N]> for $name {
            fn from(cards: [crate::card::Card; N]) -> Self {
                Self(cards.into())
            }
        }

        impl From<crate::collection::CardList> for $name {
            fn from(cards: crate::collection::CardList) -> Self {
                Self(cards)
            }
        }

        impl FromIterator<crate::card::Card> for $name {
            fn from_iter<I: IntoIterator<Item = crate::card::Card>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl Extend<crate::card::Card> for $name {
            fn extend<I: IntoIterator<Item = crate::card::Card>>(&mut self, iter: I) {
                self.0.extend(iter);
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a crate::card::Card;
            type IntoIter = core::slice::Iter<'a, crate::card::Card>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use card_collection;
