//! Error types for card, deck, and simulation operations.

use core::fmt;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card from outside input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four suit symbols.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when building a hand from given cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while printing the deck demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoError {
    /// Dealing from the demo deck failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The output sink rejected a write.
    #[error("failed to write demo output")]
    Write(#[from] fmt::Error),
}

/// Errors that can occur while running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A trial failed to deal its hand.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The trial cap was reached before the target number of matches.
    #[error("trial limit reached after {trials} trials with {matches} matches")]
    TrialLimit {
        /// Trials run before giving up.
        trials: u64,
        /// Matches observed in those trials.
        matches: u64,
    },
}

/// Error returned when parsing an unknown [`Classification`](crate::Classification) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "unknown classification (expected one of flush, pair, two-pair, trips, full-house, quads, straight)"
)]
pub struct ParseClassificationError;
