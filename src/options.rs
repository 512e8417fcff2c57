//! Simulation configuration options.

/// Configuration options for a Monte Carlo run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handodds::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_target_matches(500)
///     .with_seed(7)
///     .with_max_trials(Some(1_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationOptions {
    /// Number of matching hands to observe before stopping.
    pub target_matches: u64,
    /// Seed for the shuffle generator.
    pub seed: u64,
    /// Stop with an error after this many trials.
    /// `None` runs until the target is reached.
    pub max_trials: Option<u64>,
    /// Number of independent workers for the parallel driver.
    pub workers: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            target_matches: 1000,
            seed: 0,
            max_trials: None,
            workers: 1,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of matches to observe.
    ///
    /// # Example
    ///
    /// ```
    /// use handodds::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_target_matches(10);
    /// assert_eq!(options.target_matches, 10);
    /// ```
    #[must_use]
    pub const fn with_target_matches(mut self, target: u64) -> Self {
        self.target_matches = target;
        self
    }

    /// Sets the generator seed.
    ///
    /// # Example
    ///
    /// ```
    /// use handodds::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the trial cap.
    ///
    /// # Example
    ///
    /// ```
    /// use handodds::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_max_trials(Some(100));
    /// assert_eq!(options.max_trials, Some(100));
    /// ```
    #[must_use]
    pub const fn with_max_trials(mut self, max_trials: Option<u64>) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Sets the worker count. Zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use handodds::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_workers(4);
    /// assert_eq!(options.workers, 4);
    /// ```
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
