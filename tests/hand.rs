//! Hand classification integration tests.

use handodds::{
    Card, Classification, DECK_SIZE, DealError, Deck, HAND_SIZE, Hand, HandError, RankPattern,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hand(cards: [&str; 5]) -> Hand {
    Hand::from_cards(cards.map(|text| text.parse::<Card>().unwrap())).unwrap()
}

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn exclusive_flags(hand: &Hand) -> [bool; 5] {
    [
        hand.is_pair(),
        hand.is_two_pair(),
        hand.is_trips(),
        hand.is_full_house(),
        hand.is_quads(),
    ]
}

#[test]
fn deal_moves_five_cards_out_of_deck() {
    let mut deck = Deck::new();
    let hand = Hand::deal(&mut deck).unwrap();

    assert_eq!(deck.len(), DECK_SIZE - HAND_SIZE);
    assert_eq!(hand.to_string(), "[2♣, 3♣, 4♣, 5♣, 6♣]");
    for card in hand.cards() {
        assert!(!deck.cards().contains(card));
    }
}

#[test]
fn deal_from_short_deck_leaves_it_untouched() {
    let mut deck = Deck::new();
    while deck.len() > 4 {
        deck.deal().unwrap();
    }
    let before = deck.clone();

    assert_eq!(Hand::deal(&mut deck).unwrap_err(), DealError::EmptyDeck);
    assert_eq!(deck, before);
}

#[test]
fn deck_yields_ten_hands() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE / HAND_SIZE {
        Hand::deal(&mut deck).unwrap();
    }
    assert_eq!(deck.len(), 2);
    assert_eq!(Hand::deal(&mut deck).unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn match_counts_per_pattern() {
    let cases = [
        (["2♣", "5♦", "9♥", "J♠", "K♣"], 0, RankPattern::HighCard),
        (["2♣", "2♦", "9♥", "J♠", "K♣"], 2, RankPattern::Pair),
        (["2♣", "2♦", "9♥", "9♠", "K♣"], 4, RankPattern::TwoPair),
        (["2♣", "2♦", "2♥", "J♠", "K♣"], 6, RankPattern::Trips),
        (["2♣", "2♦", "2♥", "K♠", "K♣"], 8, RankPattern::FullHouse),
        (["2♣", "2♦", "2♥", "2♠", "K♣"], 12, RankPattern::Quads),
    ];

    for (cards, matches, pattern) in cases {
        let hand = hand(cards);
        assert_eq!(hand.num_matches(), matches, "{hand}");
        assert_eq!(hand.pattern(), Some(pattern), "{hand}");
        assert_eq!(RankPattern::from_matches(matches), Some(pattern));
        assert_eq!(pattern.matches(), matches);
    }

    assert_eq!(RankPattern::from_matches(3), None);
    assert_eq!(RankPattern::from_matches(10), None);
}

#[test]
fn duplicate_cards_are_rejected() {
    let ace = card("A♠");
    assert_eq!(
        Hand::from_cards([ace; 5]).unwrap_err(),
        HandError::DuplicateCard(ace)
    );

    let king = card("K♦");
    assert_eq!(
        Hand::from_cards([card("2♣"), king, card("9♥"), card("J♠"), king]).unwrap_err(),
        HandError::DuplicateCard(king)
    );

    let same_rank = [card("7♣"), card("7♦"), card("7♥"), card("7♠"), card("2♣")];
    assert!(Hand::from_cards(same_rank).unwrap().is_quads());
}

#[test]
fn pattern_flags_match_their_counts() {
    let full_house = hand(["Q♣", "Q♦", "Q♥", "7♠", "7♣"]);
    assert!(full_house.is_full_house());
    assert!(!full_house.is_trips());
    assert!(!full_house.is_pair());

    let two_pair = hand(["Q♣", "Q♦", "7♥", "7♠", "A♣"]);
    assert!(two_pair.is_two_pair());
    assert!(!two_pair.is_pair());

    let quads = hand(["A♣", "A♦", "A♥", "A♠", "2♣"]);
    assert!(quads.is_quads());
    assert!(!quads.is_trips());
}

#[test]
fn random_hands_have_valid_counts_and_one_pattern_at_most() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..500 {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        while deck.len() >= HAND_SIZE {
            let hand = Hand::deal(&mut deck).unwrap();
            let matches = hand.num_matches();
            assert!(
                [0, 2, 4, 6, 8, 12].contains(&matches),
                "{hand} has {matches} matches"
            );
            let set = exclusive_flags(&hand).iter().filter(|&&flag| flag).count();
            assert!(set <= 1, "{hand} has {set} patterns");
            assert_eq!(set == 0, matches == 0);
            assert!(hand.pattern().is_some(), "{hand}");
        }
    }
}

#[test]
fn straight_detection() {
    assert!(hand(["2♣", "3♦", "4♥", "5♠", "6♣"]).is_straight());
    assert!(hand(["6♣", "4♦", "2♥", "5♠", "3♣"]).is_straight());
    assert!(hand(["10♣", "J♦", "Q♥", "K♠", "A♣"]).is_straight());

    assert!(!hand(["2♣", "2♦", "4♥", "5♠", "6♣"]).is_straight());
    assert!(!hand(["2♣", "3♦", "4♥", "5♠", "7♣"]).is_straight());
    assert!(!hand(["A♣", "2♦", "3♥", "4♠", "5♣"]).is_straight());
}

#[test]
fn straight_check_keeps_card_order() {
    let mut straight = hand(["6♣", "4♦", "2♥", "5♠", "3♣"]);
    let before = straight.clone();
    assert!(straight.is_straight());
    assert_eq!(straight, before);

    straight.sort_by_rank();
    assert_eq!(straight.to_string(), "[2♥, 3♣, 4♦, 5♠, 6♣]");
}

#[test]
fn flush_detection() {
    assert!(hand(["2♣", "5♣", "9♣", "J♣", "K♣"]).is_flush());
    assert!(!hand(["2♣", "5♣", "9♣", "J♣", "K♦"]).is_flush());
    assert!(!hand(["2♥", "5♣", "9♣", "J♣", "K♣"]).is_flush());

    let straight_flush = hand(["2♣", "3♣", "4♣", "5♣", "6♣"]);
    assert!(straight_flush.is_flush());
    assert!(straight_flush.is_straight());
}

#[test]
fn classification_names_and_predicates() {
    for classification in Classification::ALL {
        let name = classification.to_string();
        assert_eq!(name.parse::<Classification>(), Ok(classification));
    }
    assert_eq!("Full-House".parse::<Classification>(), Ok(Classification::FullHouse));
    assert!("royal".parse::<Classification>().is_err());

    let trips = hand(["9♣", "9♦", "9♥", "J♠", "K♣"]);
    assert!(Classification::Trips.matches(&trips));
    assert!(!Classification::Pair.matches(&trips));
    assert!(!Classification::Straight.matches(&trips));
    assert!(!Classification::Flush.matches(&trips));
}
