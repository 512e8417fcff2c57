//! Deck walkthrough output tests.

use handodds::{Deck, DemoError, write_demo};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn demo_prints_card_then_deck_lifecycle() {
    let mut out = String::new();
    write_demo(&mut out, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();

    let mut shuffled = Deck::new();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
    let shuffled_text = shuffled.to_string();
    let top = shuffled.deal().unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "♣ A".to_owned(),
            Deck::new().to_string(),
            shuffled_text,
            top.to_string(),
            shuffled.to_string(),
        ]
    );
    assert_eq!(shuffled.len(), 51);
}

#[test]
fn demo_is_deterministic_per_seed() {
    let mut a = String::new();
    let mut b = String::new();
    write_demo(&mut a, &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
    write_demo(&mut b, &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
    assert_eq!(a, b);
}

struct Refuse;

impl core::fmt::Write for Refuse {
    fn write_str(&mut self, _: &str) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

#[test]
fn demo_reports_write_failure() {
    let err = write_demo(&mut Refuse, &mut ChaCha8Rng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, DemoError::Write(core::fmt::Error));
}
