//! The deck walkthrough printed by the `demo` command.

use core::fmt::Write;

use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::error::DemoError;

/// Writes the deck walkthrough to `out`, one item per line.
///
/// In order: the suit and rank of `A♣`, a fresh deck, the same deck shuffled
/// with `rng`, the card dealt from its top, and the deck after that deal.
///
/// # Errors
///
/// Returns [`DemoError::Write`] if `out` rejects a write.
pub fn write_demo<W, R>(out: &mut W, rng: &mut R) -> Result<(), DemoError>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let card = Card::new(Rank::Ace, Suit::Clubs);
    writeln!(out, "{} {}", card.suit(), card.rank())?;

    let mut deck = Deck::new();
    writeln!(out, "{deck}")?;
    deck.shuffle(rng);
    writeln!(out, "{deck}")?;
    writeln!(out, "{}", deck.deal()?)?;
    writeln!(out, "{deck}")?;

    Ok(())
}
