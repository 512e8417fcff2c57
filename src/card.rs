//! Card types and rank/suit domains.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// Suits are unordered for hand evaluation and only matter for flushes. The
/// declaration order is the order a fresh [`Deck`](crate::Deck) is built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit symbol used in a card's canonical form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "♣" => Ok(Self::Clubs),
            "♦" => Ok(Self::Diamonds),
            "♥" => Ok(Self::Hearts),
            "♠" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Card rank, Two through Ace. Ace is always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of the rank in [`Rank::ALL`] (Two = 0, Ace = 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank label used in a card's canonical form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(CardError::InvalidRank)
    }
}

/// Numeric ranks: 2 through 10 for pips, 11 = Jack, 12 = Queen, 13 = King,
/// 14 = Ace.
impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[usize::from(value - 2)]),
            _ => Err(CardError::InvalidRank),
        }
    }
}

/// A playing card.
///
/// `PartialEq` and `Hash` compare the full (rank, suit) identity, so cards are
/// safe to use in sets and maps. Hand evaluation matches cards by rank alone;
/// use [`Card::same_rank`] and [`Card::rank_cmp`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from rank and suit labels, e.g. `("10", "♥")`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] if
    /// either label is outside its domain. The rank is checked first.
    pub fn from_labels(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank = rank.parse()?;
        let suit = suit.parse()?;
        Ok(Self::new(rank, suit))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether both cards have the same rank, regardless of suit.
    #[must_use]
    pub fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Compares two cards by rank only. Cards of equal rank compare equal
    /// even when their suits differ.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Returns whether this card ranks strictly below `other`.
    #[must_use]
    pub fn rank_lt(&self, other: &Self) -> bool {
        self.rank < other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the canonical `"<rank><suit>"` form, e.g. `"A♠"` or `"10♦"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((split, _)) = s.char_indices().last() else {
            return Err(CardError::InvalidRank);
        };
        let (rank, suit) = s.split_at(split);
        Self::from_labels(rank, suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
