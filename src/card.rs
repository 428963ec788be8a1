//! Card types and the canonical 48-card table.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Card month. Every month-suit holds four cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// Pine.
    Jan = 1,
    /// Plum blossom.
    Feb,
    /// Cherry blossom.
    Mar,
    /// Wisteria.
    Apr,
    /// Iris.
    May,
    /// Peony.
    Jun,
    /// Bush clover.
    Jul,
    /// Pampas grass.
    Aug,
    /// Chrysanthemum.
    Sep,
    /// Maple.
    Oct,
    /// Paulownia.
    Nov,
    /// Willow.
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Returns the month number (1 = January, 12 = December).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of the month.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Looks up a month by number. Returns `None` outside 1..=12.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self::ALL[number as usize - 1])
        } else {
            None
        }
    }
}

/// Card group used by the scoring combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    /// Bright (gwang).
    Bright,
    /// Animal (yeol).
    Animal,
    /// Ribbon (tti).
    Ribbon,
    /// Junk (pi).
    Junk,
    /// Double junk.
    Junk2,
}

impl Group {
    /// All groups in scoring order.
    pub const ALL: [Self; 5] = [
        Self::Bright,
        Self::Animal,
        Self::Ribbon,
        Self::Junk,
        Self::Junk2,
    ];

    /// Returns the zero-based index of the group.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of groups a card belongs to.
///
/// Almost every card has exactly one group; the September cup is both an
/// animal and a double junk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupSet(u8);

impl GroupSet {
    /// A set holding a single group.
    #[must_use]
    pub const fn single(group: Group) -> Self {
        Self(group.bit())
    }

    /// A set holding two groups.
    #[must_use]
    pub const fn pair(first: Group, second: Group) -> Self {
        Self(first.bit() | second.bit())
    }

    /// Returns whether the set contains `group`.
    #[must_use]
    pub const fn contains(self, group: Group) -> bool {
        self.0 & group.bit() != 0
    }

    /// Iterates the groups in the set in scoring order.
    pub fn iter(self) -> impl Iterator<Item = Group> {
        Group::ALL.into_iter().filter(move |group| self.contains(*group))
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// A flower card.
///
/// Identity is the pair of month and group set. The display name takes no
/// part in equality or hashing, so two junk cards of the same month are equal.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    name: &'static str,
    month: Month,
    groups: GroupSet,
}

impl Card {
    /// Creates a card belonging to a single group.
    #[must_use]
    pub const fn new(name: &'static str, month: Month, group: Group) -> Self {
        Self {
            name,
            month,
            groups: GroupSet::single(group),
        }
    }

    /// Creates a card belonging to two groups.
    #[must_use]
    pub const fn dual(name: &'static str, month: Month, first: Group, second: Group) -> Self {
        Self {
            name,
            month,
            groups: GroupSet::pair(first, second),
        }
    }

    /// Returns a copy of the card with a different display name.
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the groups the card belongs to.
    #[must_use]
    pub const fn groups(&self) -> GroupSet {
        self.groups
    }

    /// Returns whether the card belongs to `group`.
    #[must_use]
    pub const fn is(&self, group: Group) -> bool {
        self.groups.contains(group)
    }

    pub(crate) const fn key(&self) -> (u8, u8) {
        (self.month.number(), self.groups.bits())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 48;

/// Pine and Crane.
pub const CRANE: Card = Card::new("Pine and Crane", Month::Jan, Group::Bright);
/// Pine and Red Poem Ribbon.
pub const PINE_RED_POEM: Card = Card::new("Pine and Red Poem Ribbon", Month::Jan, Group::Ribbon);
/// Pine.
pub const PINE: Card = Card::new("Pine", Month::Jan, Group::Junk);

/// Plum Blossom and Bush Warbler.
pub const BUSH_WARBLER: Card =
    Card::new("Plum Blossom and Bush Warbler", Month::Feb, Group::Animal);
/// Plum Blossom and Red Poem Ribbon.
pub const PLUM_RED_POEM: Card =
    Card::new("Plum Blossom and Red Poem Ribbon", Month::Feb, Group::Ribbon);
/// Plum Blossom.
pub const PLUM: Card = Card::new("Plum Blossom", Month::Feb, Group::Junk);

/// Cherry Blossom and Curtain.
pub const CURTAIN: Card = Card::new("Cherry Blossom and Curtain", Month::Mar, Group::Bright);
/// Cherry Blossom and Red Poem Ribbon.
pub const CHERRY_RED_POEM: Card =
    Card::new("Cherry Blossom and Red Poem Ribbon", Month::Mar, Group::Ribbon);
/// Cherry Blossom.
pub const CHERRY: Card = Card::new("Cherry Blossom", Month::Mar, Group::Junk);

/// Wisteria and Cuckoo.
pub const CUCKOO: Card = Card::new("Wisteria and Cuckoo", Month::Apr, Group::Animal);
/// Wisteria and Red Ribbon.
pub const WISTERIA_RED: Card = Card::new("Wisteria and Red Ribbon", Month::Apr, Group::Ribbon);
/// Wisteria.
pub const WISTERIA: Card = Card::new("Wisteria", Month::Apr, Group::Junk);

/// Iris and Bridge.
pub const BRIDGE: Card = Card::new("Iris and Bridge", Month::May, Group::Animal);
/// Iris and Red Ribbon.
pub const IRIS_RED: Card = Card::new("Iris and Red Ribbon", Month::May, Group::Ribbon);
/// Iris.
pub const IRIS: Card = Card::new("Iris", Month::May, Group::Junk);

/// Peony and Butterfly.
pub const BUTTERFLY: Card = Card::new("Peony and Butterfly", Month::Jun, Group::Animal);
/// Peony and Blue Poem Ribbon.
pub const PEONY_BLUE_POEM: Card =
    Card::new("Peony and Blue Poem Ribbon", Month::Jun, Group::Ribbon);
/// Peony.
pub const PEONY: Card = Card::new("Peony", Month::Jun, Group::Junk);

/// Bush Clover and Boar.
pub const BOAR: Card = Card::new("Bush Clover and Boar", Month::Jul, Group::Animal);
/// Bush Clover and Red Ribbon.
pub const BUSH_CLOVER_RED: Card =
    Card::new("Bush Clover and Red Ribbon", Month::Jul, Group::Ribbon);
/// Bush Clover.
pub const BUSH_CLOVER: Card = Card::new("Bush Clover", Month::Jul, Group::Junk);

/// Pampas Grass and Moon.
pub const MOON: Card = Card::new("Pampas Grass and Moon", Month::Aug, Group::Bright);
/// Pampas Grass and Geese.
pub const GEESE: Card = Card::new("Pampas Grass and Geese", Month::Aug, Group::Animal);
/// Pampas Grass.
pub const PAMPAS_GRASS: Card = Card::new("Pampas Grass", Month::Aug, Group::Junk);

/// Chrysanthemum and Cup. Counts as both an animal and a double junk.
pub const CUP: Card = Card::dual(
    "Chrysanthemum and Cup",
    Month::Sep,
    Group::Animal,
    Group::Junk2,
);
/// Chrysanthemum and Blue Poem Ribbon.
pub const CHRYSANTHEMUM_BLUE_POEM: Card =
    Card::new("Chrysanthemum and Blue Poem Ribbon", Month::Sep, Group::Ribbon);
/// Chrysanthemum.
pub const CHRYSANTHEMUM: Card = Card::new("Chrysanthemum", Month::Sep, Group::Junk);

/// Maple and Deer.
pub const DEER: Card = Card::new("Maple and Deer", Month::Oct, Group::Animal);
/// Maple and Blue Poem Ribbon.
pub const MAPLE_BLUE_POEM: Card =
    Card::new("Maple and Blue Poem Ribbon", Month::Oct, Group::Ribbon);
/// Maple.
pub const MAPLE: Card = Card::new("Maple", Month::Oct, Group::Junk);

/// Paulownia and Phoenix.
pub const PHOENIX: Card = Card::new("Paulownia and Phoenix", Month::Nov, Group::Bright);
/// Paulownia.
pub const PAULOWNIA: Card = Card::new("Paulownia", Month::Nov, Group::Junk);
/// Paulownia double junk.
pub const PAULOWNIA_2: Card = Card::new("Paulownia 2", Month::Nov, Group::Junk2);

/// Willow and Rain.
pub const RAIN: Card = Card::new("Willow and Rain", Month::Dec, Group::Bright);
/// Willow and Swallow.
pub const SWALLOW: Card = Card::new("Willow and Swallow", Month::Dec, Group::Animal);
/// Willow and Red Ribbon.
pub const WILLOW_RED: Card = Card::new("Willow and Red Ribbon", Month::Dec, Group::Ribbon);
/// Willow double junk.
pub const WILLOW_2: Card = Card::new("Willow", Month::Dec, Group::Junk2);

/// The full deck in month order. Plain junk cards appear twice per month.
pub const ALL_CARDS: [Card; DECK_SIZE] = [
    CRANE,
    PINE_RED_POEM,
    PINE,
    PINE,
    BUSH_WARBLER,
    PLUM_RED_POEM,
    PLUM,
    PLUM,
    CURTAIN,
    CHERRY_RED_POEM,
    CHERRY,
    CHERRY,
    CUCKOO,
    WISTERIA_RED,
    WISTERIA,
    WISTERIA,
    BRIDGE,
    IRIS_RED,
    IRIS,
    IRIS,
    BUTTERFLY,
    PEONY_BLUE_POEM,
    PEONY,
    PEONY,
    BOAR,
    BUSH_CLOVER_RED,
    BUSH_CLOVER,
    BUSH_CLOVER,
    MOON,
    GEESE,
    PAMPAS_GRASS,
    PAMPAS_GRASS,
    CUP,
    CHRYSANTHEMUM_BLUE_POEM,
    CHRYSANTHEMUM,
    CHRYSANTHEMUM,
    DEER,
    MAPLE_BLUE_POEM,
    MAPLE,
    MAPLE,
    PHOENIX,
    PAULOWNIA_2,
    PAULOWNIA,
    PAULOWNIA,
    RAIN,
    SWALLOW,
    WILLOW_RED,
    WILLOW_2,
];
