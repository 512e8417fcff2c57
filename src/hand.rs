//! Five-card hands and their rank-matching classification.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, HandError, ParseClassificationError};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Counts ordered pairs `(i, j)`, `i != j`, of cards sharing a rank.
///
/// A group of `k` equal ranks contributes `k * (k - 1)`, so five cards can
/// only produce 0, 2, 4, 6, 8 or 12.
fn count_matches(cards: &[Card]) -> u8 {
    let mut matches = 0;

    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate() {
            if i != j && a.same_rank(b) {
                matches += 1;
            }
        }
    }

    matches
}

/// Rank-multiplicity shape of a hand, ignoring suits and sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankPattern {
    /// Five distinct ranks.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
}

impl RankPattern {
    /// Maps a match count to its pattern. Returns `None` for counts five
    /// cards cannot produce.
    #[must_use]
    pub const fn from_matches(matches: u8) -> Option<Self> {
        match matches {
            0 => Some(Self::HighCard),
            2 => Some(Self::Pair),
            4 => Some(Self::TwoPair),
            6 => Some(Self::Trips),
            8 => Some(Self::FullHouse),
            12 => Some(Self::Quads),
            _ => None,
        }
    }

    /// Match count that produces this pattern.
    #[must_use]
    pub const fn matches(self) -> u8 {
        match self {
            Self::HighCard => 0,
            Self::Pair => 2,
            Self::TwoPair => 4,
            Self::Trips => 6,
            Self::FullHouse => 8,
            Self::Quads => 12,
        }
    }
}

/// A five-card hand.
///
/// Cards are moved out of the deck when dealt; the hand owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Deals five cards from the top of `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck holds fewer than five
    /// cards. The deck is left untouched in that case.
    pub fn deal(deck: &mut Deck) -> Result<Self, DealError> {
        if deck.len() < HAND_SIZE {
            return Err(DealError::EmptyDeck);
        }

        Ok(Self {
            cards: [
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
            ],
        })
    }

    /// Creates a hand from five given cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if any (rank, suit) pair appears
    /// twice. A real deck never yields such a hand.
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Sorts the cards by rank, lowest first. Order among equal ranks is kept.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by(Card::rank_cmp);
    }

    /// Number of ordered equal-rank card pairs.
    #[must_use]
    pub fn num_matches(&self) -> u8 {
        count_matches(&self.cards)
    }

    /// Returns the rank-multiplicity pattern of the hand.
    ///
    /// Always `Some` for five distinct cards, which every constructor
    /// guarantees.
    #[must_use]
    pub fn pattern(&self) -> Option<RankPattern> {
        RankPattern::from_matches(count_matches(&self.cards))
    }

    /// Returns whether all five cards share a suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|card| card.suit() == suit)
    }

    /// Returns whether the hand holds exactly one pair and nothing better.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.num_matches() == RankPattern::Pair.matches()
    }

    /// Returns whether the hand holds exactly two pairs.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.num_matches() == RankPattern::TwoPair.matches()
    }

    /// Returns whether the hand holds three of a kind without a pair.
    #[must_use]
    pub fn is_trips(&self) -> bool {
        self.num_matches() == RankPattern::Trips.matches()
    }

    /// Returns whether the hand holds three of a kind and a pair.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.num_matches() == RankPattern::FullHouse.matches()
    }

    /// Returns whether the hand holds four of a kind.
    #[must_use]
    pub fn is_quads(&self) -> bool {
        self.num_matches() == RankPattern::Quads.matches()
    }

    /// Returns whether the five ranks are distinct and consecutive.
    ///
    /// Ace is high only, so `A 2 3 4 5` is not a straight. Suits are ignored.
    /// The stored card order is not changed; see [`Hand::sort_by_rank`].
    #[must_use]
    pub fn is_straight(&self) -> bool {
        if self.num_matches() != 0 {
            return false;
        }

        let mut sorted = self.cards;
        sorted.sort_by(Card::rank_cmp);
        sorted[HAND_SIZE - 1].rank().index() == sorted[0].rank().index() + HAND_SIZE - 1
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// A hand property a simulation can count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Classification {
    /// All five cards share a suit.
    Flush,
    /// Exactly one pair.
    Pair,
    /// Exactly two pairs.
    TwoPair,
    /// Three of a kind without a pair.
    Trips,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
    /// Five distinct consecutive ranks.
    Straight,
}

impl Classification {
    /// Every classification.
    pub const ALL: [Self; 7] = [
        Self::Flush,
        Self::Pair,
        Self::TwoPair,
        Self::Trips,
        Self::FullHouse,
        Self::Quads,
        Self::Straight,
    ];

    /// Returns whether `hand` has this property.
    #[must_use]
    pub fn matches(self, hand: &Hand) -> bool {
        match self {
            Self::Flush => hand.is_flush(),
            Self::Pair => hand.is_pair(),
            Self::TwoPair => hand.is_two_pair(),
            Self::Trips => hand.is_trips(),
            Self::FullHouse => hand.is_full_house(),
            Self::Quads => hand.is_quads(),
            Self::Straight => hand.is_straight(),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flush => "flush",
            Self::Pair => "pair",
            Self::TwoPair => "two-pair",
            Self::Trips => "trips",
            Self::FullHouse => "full-house",
            Self::Quads => "quads",
            Self::Straight => "straight",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(ParseClassificationError)
    }
}
