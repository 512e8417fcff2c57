//! Monte Carlo estimation of hand probabilities.
//!
//! Each trial builds a fresh deck, shuffles it, deals one hand, and tests it
//! against a predicate. A run stops once the requested number of matching
//! hands has been seen, so rarer properties take proportionally more trials.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SimulationError;
use crate::hand::Hand;
use crate::options::SimulationOptions;

/// Trial and match counts from a simulation run.
///
/// Estimates from independent runs combine with `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Estimate {
    /// Hands dealt.
    pub trials: u64,
    /// Hands that matched the predicate.
    pub matches: u64,
}

impl Estimate {
    /// Observed probability in `0.0..=1.0`. Zero when no trials were run.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.matches as f64 / self.trials as f64
    }

    /// Observed probability as a percentage.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    pub fn percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 * self.matches as f64 / self.trials as f64
    }
}

impl Add for Estimate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            trials: self.trials + rhs.trials,
            matches: self.matches + rhs.matches,
        }
    }
}

impl Sum for Estimate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

/// Runs trials until `options.target_matches` hands satisfy `predicate`.
///
/// Shuffles with a [`ChaCha8Rng`] seeded from `options.seed`, so equal options
/// give equal estimates.
///
/// # Errors
///
/// Returns [`SimulationError::TrialLimit`] if `options.max_trials` is reached
/// first.
pub fn simulate<F>(options: &SimulationOptions, predicate: F) -> Result<Estimate, SimulationError>
where
    F: FnMut(&Hand) -> bool,
{
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    simulate_with_rng(options, &mut rng, predicate)
}

/// Like [`simulate`], but shuffles with the given generator and ignores
/// `options.seed`.
///
/// # Errors
///
/// Returns [`SimulationError::TrialLimit`] if `options.max_trials` is reached
/// first.
pub fn simulate_with_rng<R, F>(
    options: &SimulationOptions,
    rng: &mut R,
    mut predicate: F,
) -> Result<Estimate, SimulationError>
where
    R: Rng + ?Sized,
    F: FnMut(&Hand) -> bool,
{
    let mut estimate = Estimate::default();

    while estimate.matches < options.target_matches {
        if options
            .max_trials
            .is_some_and(|limit| estimate.trials >= limit)
        {
            return Err(SimulationError::TrialLimit {
                trials: estimate.trials,
                matches: estimate.matches,
            });
        }

        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hand = Hand::deal(&mut deck)?;
        estimate.trials += 1;

        if predicate(&hand) {
            estimate.matches += 1;
            log::trace!("match {} on trial {}: {hand}", estimate.matches, estimate.trials);
        }
    }

    log::debug!(
        "simulation finished: {} matches in {} trials ({})",
        estimate.matches,
        estimate.trials,
        estimate
    );

    Ok(estimate)
}

/// Sum of the even target shares of workers `0..worker`.
#[cfg(feature = "parallel")]
fn shares_before(total: u64, workers: u64, worker: u64) -> u64 {
    worker * (total / workers) + worker.min(total % workers)
}

/// Scales `cap` by `part / whole`, rounding down.
#[cfg(feature = "parallel")]
fn scale(cap: u64, part: u64, whole: u64) -> u64 {
    (u128::from(cap) * u128::from(part) / u128::from(whole)) as u64
}

/// Runs [`simulate`] on `options.workers` rayon workers and sums the results.
///
/// The target is split evenly between workers. Any trial cap is split in
/// proportion to each worker's target, so the caps add up to the one given
/// and workers with nothing to find get none of it. Worker `i` shuffles with
/// its own generator seeded with `options.seed + i`.
///
/// # Errors
///
/// Returns the first deal error, or [`SimulationError::TrialLimit`] with the
/// combined counts if any worker hit its share of the trial cap.
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub fn simulate_parallel<F>(
    options: &SimulationOptions,
    predicate: F,
) -> Result<Estimate, SimulationError>
where
    F: Fn(&Hand) -> bool + Sync,
{
    use alloc::vec::Vec;
    use rayon::prelude::*;

    let workers = options.workers.max(1) as u64;

    let results: Vec<Result<Estimate, SimulationError>> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let target = options.target_matches;
            let start = shares_before(target, workers, worker);
            let end = shares_before(target, workers, worker + 1);
            let max_trials = options
                .max_trials
                .filter(|_| end > start)
                .map(|cap| scale(cap, end, target) - scale(cap, start, target));
            let worker_options = options
                .with_target_matches(end - start)
                .with_max_trials(max_trials)
                .with_seed(options.seed.wrapping_add(worker));
            let result = simulate(&worker_options, &predicate);
            log::debug!("worker {worker} finished: {result:?}");
            result
        })
        .collect();

    let mut total = Estimate::default();
    let mut limited = false;

    for result in results {
        match result {
            Ok(estimate) => total = total + estimate,
            Err(SimulationError::TrialLimit { trials, matches }) => {
                limited = true;
                total = total + Estimate { trials, matches };
            }
            Err(err) => return Err(err),
        }
    }

    if limited {
        return Err(SimulationError::TrialLimit {
            trials: total.trials,
            matches: total.matches,
        });
    }

    Ok(total)
}
