//! Card, collection, and scoring tests.

use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use gostop::card::{
    BOAR, BRIDGE, BUSH_CLOVER, BUSH_CLOVER_RED, BUSH_WARBLER, BUTTERFLY, CHERRY, CHERRY_RED_POEM,
    CHRYSANTHEMUM, CHRYSANTHEMUM_BLUE_POEM, CRANE, CUCKOO, CUP, CURTAIN, DEER, GEESE, IRIS,
    IRIS_RED, MAPLE, MAPLE_BLUE_POEM, MOON, PAMPAS_GRASS, PAULOWNIA, PAULOWNIA_2, PEONY,
    PEONY_BLUE_POEM, PHOENIX, PINE, PINE_RED_POEM, PLUM, PLUM_RED_POEM, RAIN, SWALLOW, WILLOW_2,
    WILLOW_RED, WISTERIA, WISTERIA_RED,
};
use gostop::{
    ALL_CARDS, Card, CardError, CardList, Combination, DECK_SIZE, Deck, Group, Hand, Month,
    TableCards, TakenCards, total_points,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn combos(expected: &[(&str, u32)]) -> Vec<Combination> {
    expected
        .iter()
        .map(|(label, points)| Combination::new(*label, *points))
        .collect()
}

fn taken(cards: &[Card]) -> TakenCards {
    cards.iter().copied().collect()
}

#[test]
fn cards_compare_by_month_and_group() {
    let renamed = Card::new("Tsuru", Month::Jan, Group::Bright);
    assert_eq!(renamed, CRANE);
    assert_eq!(hash_of(&renamed), hash_of(&CRANE));
    assert_eq!(CRANE.with_name("Crane").name(), "Crane");
    assert_eq!(CRANE.with_name("Crane"), CRANE);

    assert_ne!(CRANE, PINE);
    assert_ne!(CUP, Card::new("Cup", Month::Sep, Group::Animal));
    assert_eq!(CUP, Card::dual("Cup", Month::Sep, Group::Animal, Group::Junk2));
}

#[test]
fn cup_belongs_to_two_groups() {
    assert!(CUP.is(Group::Animal));
    assert!(CUP.is(Group::Junk2));
    assert!(!CUP.is(Group::Junk));
    assert_eq!(
        CUP.groups().iter().collect::<Vec<_>>(),
        vec![Group::Animal, Group::Junk2]
    );
}

#[test]
fn card_displays_its_name() {
    assert_eq!(RAIN.to_string(), "Willow and Rain");
    assert_eq!(CUP.to_string(), "Chrysanthemum and Cup");
}

#[test]
fn month_numbers() {
    assert_eq!(Month::Jan.number(), 1);
    assert_eq!(Month::Dec.number(), 12);
    assert_eq!(Month::Jan.index(), 0);
    assert_eq!(Month::from_number(9), Some(Month::Sep));
    assert_eq!(Month::from_number(0), None);
    assert_eq!(Month::from_number(13), None);
}

#[test]
fn full_deck_has_four_cards_per_month() {
    assert_eq!(ALL_CARDS.len(), DECK_SIZE);
    let deck: CardList = ALL_CARDS.into_iter().collect();
    for month in Month::ALL {
        assert_eq!(deck.count_month(month), 4, "{month:?}");
    }
    assert_eq!(deck.count_group(Group::Bright), 5);
    assert_eq!(deck.count_group(Group::Animal), 9);
    assert_eq!(deck.count_group(Group::Ribbon), 10);
    assert_eq!(deck.count_group(Group::Junk), 22);
    assert_eq!(deck.count_group(Group::Junk2), 3);
}

#[test]
fn card_list_add_and_pop() {
    let mut cards = CardList::new();
    cards.push(CRANE);
    assert_eq!(cards.len(), 1);

    assert_eq!(cards.pop(), Ok(CRANE));
    assert_eq!(cards.pop(), Err(CardError::Empty));
}

#[test]
fn card_list_remove_takes_first_equal_card() {
    let mut cards = CardList::from([CRANE, PINE, PLUM, PINE]);
    assert_eq!(cards.remove(&PINE), Ok(PINE));
    assert_eq!(cards.cards(), &[CRANE, PLUM, PINE]);
    assert_eq!(cards.remove(&PINE), Ok(PINE));
    assert_eq!(cards.remove(&PINE), Err(CardError::NotFound));
    assert_eq!(cards.len(), 2);
}

#[test]
fn card_list_clear() {
    let mut cards = CardList::from([CRANE, CURTAIN, MOON, PHOENIX, RAIN, SWALLOW]);
    cards.clear();
    assert!(cards.is_empty());
}

#[test]
fn card_list_equality_is_a_bag() {
    let first = CardList::from([CRANE, PINE_RED_POEM, PINE, PINE]);
    let second = CardList::from([PINE_RED_POEM, PINE, CRANE, PINE]);
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));

    assert_ne!(CardList::from([PINE, PINE]), CardList::from([PINE]));
    assert_ne!(CardList::from([PINE, PLUM]), CardList::from([PINE, PINE]));
    assert_eq!(CardList::new(), CardList::default());
}

#[test]
fn split_by_month() {
    let cards = CardList::from([CRANE, CURTAIN, MOON, PHOENIX, RAIN, SWALLOW]);
    let months = cards.split_by_month();

    assert_eq!(months[Month::Jan.index()], vec![CRANE]);
    assert!(months[Month::Feb.index()].is_empty());
    assert_eq!(months[Month::Dec.index()], vec![RAIN, SWALLOW]);
}

#[test]
fn split_by_group() {
    let cards = CardList::from([CRANE, CUCKOO, IRIS_RED, PAULOWNIA, WISTERIA, WILLOW_2, CUP]);
    let groups = cards.split_by_group();

    assert_eq!(groups[Group::Bright.index()], vec![CRANE]);
    assert_eq!(groups[Group::Animal.index()], vec![CUCKOO, CUP]);
    assert_eq!(groups[Group::Ribbon.index()], vec![IRIS_RED]);
    assert_eq!(groups[Group::Junk.index()], vec![PAULOWNIA, WISTERIA]);
    assert_eq!(groups[Group::Junk2.index()], vec![WILLOW_2, CUP]);
}

#[test]
fn deck_pops_from_the_top() {
    let mut deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.peek(), Some(&WILLOW_2));
    assert_eq!(deck.pop(), Ok(WILLOW_2));
    assert_eq!(deck.len(), DECK_SIZE - 1);

    let mut empty = Deck::empty();
    assert_eq!(empty.pop(), Err(CardError::Empty));
}

#[test]
fn paired_cards_match_on_month_only() {
    let table = TableCards::from([PINE, CRANE, PLUM]);
    assert_eq!(table.get_paired_cards(&PINE), vec![PINE, CRANE]);
    assert_eq!(table.get_paired_cards(&PINE_RED_POEM), vec![PINE, CRANE]);
    assert_eq!(table.get_paired_cards(&BUSH_WARBLER), vec![PLUM]);
    assert!(table.get_paired_cards(&CHERRY).is_empty());
}

#[test]
fn hand_scores_three_and_four_of_a_month() {
    let four = Hand::from([CRANE, PINE_RED_POEM, PINE, PINE]);
    assert_eq!(four.score(), combos(&[("Four cards of a month", 1)]));

    let three = Hand::from([CRANE, PINE_RED_POEM, PINE]);
    assert_eq!(three.score(), combos(&[("Three cards of a month", 1)]));

    let two = Hand::from([CRANE, PINE, PLUM, BUSH_WARBLER]);
    assert!(two.score().is_empty());
    assert!(Hand::new().score().is_empty());
}

#[test]
fn hand_scores_follow_month_order() {
    let hand = Hand::from([
        MOON,
        GEESE,
        PAMPAS_GRASS,
        PAMPAS_GRASS,
        CRANE,
        PINE,
        PINE,
    ]);
    assert_eq!(
        hand.score(),
        combos(&[("Three cards of a month", 1), ("Four cards of a month", 1)])
    );
}

#[test]
fn no_score() {
    let pile = taken(&[CRANE, PINE, CUCKOO, WISTERIA, PEONY, MAPLE]);
    assert!(pile.score().is_empty());
}

#[test]
fn five_brights_supersede_the_smaller_bright_rules() {
    let pile = taken(&[CRANE, CURTAIN, MOON, PHOENIX, RAIN]);
    assert_eq!(pile.score(), combos(&[("Five brights", 15)]));
}

#[test]
fn four_brights() {
    let brights = [CRANE, CURTAIN, MOON, PHOENIX, RAIN];
    for skip in 0..brights.len() {
        let cards: Vec<Card> = brights
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, card)| *card)
            .collect();
        assert_eq!(taken(&cards).score(), combos(&[("Four brights", 4)]));
    }
}

#[test]
fn three_brights_without_rain() {
    let brights = [CRANE, CURTAIN, MOON, PHOENIX];
    for skip in 0..brights.len() {
        let cards: Vec<Card> = brights
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, card)| *card)
            .collect();
        assert_eq!(
            taken(&cards).score(),
            combos(&[("Three brights without rain", 3)])
        );
    }
}

#[test]
fn three_brights_with_rain() {
    let brights = [CRANE, CURTAIN, MOON, PHOENIX];
    for first in 0..brights.len() {
        for second in first + 1..brights.len() {
            let pile = taken(&[brights[first], brights[second], RAIN]);
            assert_eq!(pile.score(), combos(&[("Three brights with rain", 2)]));
        }
    }
}

#[test]
fn five_or_more_animals() {
    // No geese in the first five, so godori only joins from six on.
    let animals = [
        BUSH_WARBLER,
        CUCKOO,
        BRIDGE,
        BUTTERFLY,
        BOAR,
        GEESE,
        CUP,
        DEER,
        SWALLOW,
    ];
    assert_eq!(
        taken(&animals[..5]).score(),
        combos(&[("5 animals", 1)])
    );
    for count in 6..=animals.len() {
        let score = taken(&animals[..count]).score();
        let expected = Combination::new(format!("{count} animals"), count as u32 - 4);
        assert!(score.contains(&expected), "{count}: {score:?}");
        assert!(score.contains(&Combination::new("Godori", 5)));
    }
}

#[test]
fn godori() {
    let pile = taken(&[BUSH_WARBLER, CUCKOO, GEESE]);
    assert_eq!(pile.score(), combos(&[("Godori", 5)]));

    let pile = taken(&[BUSH_WARBLER, CUCKOO, BOAR]);
    assert!(pile.score().is_empty());
}

#[test]
fn five_or_more_ribbons() {
    let pile = taken(&[WISTERIA_RED, IRIS_RED, PEONY_BLUE_POEM, MAPLE_BLUE_POEM, WILLOW_RED]);
    assert_eq!(pile.score(), combos(&[("5 ribbons", 1)]));

    let all = taken(&[
        PINE_RED_POEM,
        PLUM_RED_POEM,
        CHERRY_RED_POEM,
        WISTERIA_RED,
        IRIS_RED,
        BUSH_CLOVER_RED,
        PEONY_BLUE_POEM,
        CHRYSANTHEMUM_BLUE_POEM,
        MAPLE_BLUE_POEM,
        WILLOW_RED,
    ]);
    assert_eq!(all.score(), combos(&[("10 ribbons", 6)]));
}

#[test]
fn three_red_ribbons_with_poem() {
    let pile = taken(&[PINE_RED_POEM, PLUM_RED_POEM, CHERRY_RED_POEM]);
    assert_eq!(pile.score(), combos(&[("Three red ribbons with poem", 3)]));

    let partial = taken(&[PINE_RED_POEM, PLUM_RED_POEM, WILLOW_RED]);
    assert!(partial.score().is_empty());
}

#[test]
fn ribbon_trio_needs_exactly_its_three_ribbons() {
    let extra_ribbon = taken(&[PINE_RED_POEM, PLUM_RED_POEM, CHERRY_RED_POEM, WISTERIA_RED]);
    assert!(extra_ribbon.score().is_empty());

    let superset = taken(&[
        PINE_RED_POEM,
        PLUM_RED_POEM,
        CHERRY_RED_POEM,
        WISTERIA_RED,
        PEONY_BLUE_POEM,
    ]);
    assert_eq!(superset.score(), combos(&[("5 ribbons", 1)]));

    let other_groups = taken(&[
        PEONY_BLUE_POEM,
        CHRYSANTHEMUM_BLUE_POEM,
        MAPLE_BLUE_POEM,
        CRANE,
        PINE,
    ]);
    assert_eq!(
        other_groups.score(),
        combos(&[("Three blue ribbons with poem", 3)])
    );
}

#[test]
fn three_red_ribbons() {
    let pile = taken(&[WISTERIA_RED, IRIS_RED, BUSH_CLOVER_RED]);
    assert_eq!(pile.score(), combos(&[("Three red ribbons", 3)]));
}

#[test]
fn three_blue_ribbons_with_poem() {
    let pile = taken(&[PEONY_BLUE_POEM, CHRYSANTHEMUM_BLUE_POEM, MAPLE_BLUE_POEM]);
    assert_eq!(pile.score(), combos(&[("Three blue ribbons with poem", 3)]));
}

#[test]
fn ten_or_more_junk() {
    let junk = [
        PINE,
        PINE,
        PLUM,
        PLUM,
        CHERRY,
        CHERRY,
        WISTERIA,
        WISTERIA,
        IRIS,
        IRIS,
        PEONY,
        PEONY,
        BUSH_CLOVER,
        BUSH_CLOVER,
        PAMPAS_GRASS,
        PAMPAS_GRASS,
        CHRYSANTHEMUM,
        CHRYSANTHEMUM,
        MAPLE,
        MAPLE,
        PAULOWNIA,
        PAULOWNIA,
    ];

    assert!(taken(&junk[..9]).score().is_empty());
    for count in 10..=21 {
        let label = format!("{count} junk cards");
        assert_eq!(
            taken(&junk[..count]).score(),
            vec![Combination::new(label, count as u32 - 9)]
        );
    }
}

#[test]
fn double_junk_does_not_count_as_junk() {
    let pile = taken(&[
        PINE, PINE, PLUM, PLUM, CHERRY, CHERRY, WISTERIA, WISTERIA, IRIS, CUP, PAULOWNIA_2,
        WILLOW_2,
    ]);
    assert!(pile.score().is_empty());
}

#[test]
fn all_matching_rules_fire_in_order() {
    let pile = taken(&[CRANE, CURTAIN, MOON, BUSH_WARBLER, CUCKOO, GEESE, BOAR, DEER]);
    let score = pile.score();
    assert_eq!(
        score,
        combos(&[
            ("Three brights without rain", 3),
            ("5 animals", 1),
            ("Godori", 5),
        ])
    );
    assert_eq!(total_points(&score), 9);
}
