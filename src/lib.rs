//! A 52-card deck, five-card hand classifier, and Monte Carlo odds estimator
//! with optional `no_std` support.
//!
//! Hands are classified by counting equal-rank card pairs, which is enough to
//! tell pairs, two pair, trips, full houses and quads apart. Flushes and
//! straights are checked separately.
//!
//! # Example
//!
//! ```
//! use handodds::{Classification, SimulationOptions, simulate};
//!
//! let options = SimulationOptions::default().with_target_matches(5).with_seed(1);
//! let estimate = simulate(&options, |hand| Classification::Pair.matches(hand)).unwrap();
//! assert_eq!(estimate.matches, 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod demo;
pub mod error;
pub mod hand;
pub mod options;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use demo::write_demo;
pub use error::{
    CardError, DealError, DemoError, HandError, ParseClassificationError, SimulationError,
};
pub use hand::{Classification, HAND_SIZE, Hand, RankPattern};
pub use options::SimulationOptions;
#[cfg(feature = "parallel")]
pub use simulation::simulate_parallel;
pub use simulation::{Estimate, simulate, simulate_with_rng};
