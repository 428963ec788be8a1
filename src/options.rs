//! Game configuration options.

use crate::card::DECK_SIZE;

/// Configuration options for a Go-Stop game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gostop::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(10)
///     .with_table_size(8)
///     .with_go_threshold(7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players.
    pub players: u8,
    /// Cards dealt to each player per deal round.
    pub hand_size: u8,
    /// Cards dealt face-up to the table per deal round.
    pub table_size: u8,
    /// Number of deal rounds.
    pub deal_rounds: u8,
    /// Score at which a player must decide to go or stop.
    pub go_threshold: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 5,
            table_size: 4,
            deal_rounds: 1,
            go_threshold: 5,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards dealt to each player per round.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of table cards dealt per round.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_size(6);
    /// assert_eq!(options.table_size, 6);
    /// ```
    #[must_use]
    pub const fn with_table_size(mut self, table_size: u8) -> Self {
        self.table_size = table_size;
        self
    }

    /// Sets the number of deal rounds.
    ///
    /// Two rounds with the default sizes give the traditional two-player
    /// layout of ten cards per hand and eight on the table.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_rounds(2);
    /// assert_eq!(options.cards_dealt(), 28);
    /// ```
    #[must_use]
    pub const fn with_deal_rounds(mut self, deal_rounds: u8) -> Self {
        self.deal_rounds = deal_rounds;
        self
    }

    /// Sets the Go/Stop score threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use gostop::GameOptions;
    ///
    /// let options = GameOptions::default().with_go_threshold(3);
    /// assert_eq!(options.go_threshold, 3);
    /// ```
    #[must_use]
    pub const fn with_go_threshold(mut self, go_threshold: u32) -> Self {
        self.go_threshold = go_threshold;
        self
    }

    /// Returns the number of cards taken from the deck by the initial deal.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        (self.players as usize * self.hand_size as usize + self.table_size as usize)
            * self.deal_rounds as usize
    }

    /// Returns whether the deck can cover the initial deal.
    #[must_use]
    pub const fn fits_deck(&self) -> bool {
        self.cards_dealt() <= DECK_SIZE
    }
}
