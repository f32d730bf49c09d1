//! Seeded strike-ladder generator for demos, tests and benches.
//!
//! Output depends only on the seed and the ladder parameters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::StrikeRecord;
use crate::error::{OverlayError, OverlayResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeLadderGenerator {
    seed: u64,
    first_strike: f64,
    step: f64,
    max_open_interest: u32,
    max_change: u32,
}

impl StrikeLadderGenerator {
    pub fn new(seed: u64, first_strike: f64, step: f64) -> OverlayResult<Self> {
        if !first_strike.is_finite() || !step.is_finite() || step <= 0.0 {
            return Err(OverlayError::InvalidData(
                "strike ladder needs a finite first strike and step > 0".to_owned(),
            ));
        }
        Ok(Self {
            seed,
            first_strike,
            step,
            max_open_interest: 5_000,
            max_change: 250,
        })
    }

    #[must_use]
    pub fn with_max_open_interest(mut self, max_open_interest: u32) -> Self {
        self.max_open_interest = max_open_interest;
        self
    }

    #[must_use]
    pub fn with_max_change(mut self, max_change: u32) -> Self {
        self.max_change = max_change;
        self
    }

    /// Generates `count` strikes ascending from `first_strike`. OI values are
    /// whole contracts in `0..=max_open_interest`, changes in
    /// `-max_change..=max_change`.
    #[must_use]
    pub fn generate(&self, count: usize) -> Vec<StrikeRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let max_change = i64::from(self.max_change);

        (0..count)
            .map(|index| {
                let price = self.first_strike + index as f64 * self.step;
                let ce = rng.random_range(0..=self.max_open_interest);
                let pe = rng.random_range(0..=self.max_open_interest);
                let change_in_ce = rng.random_range(-max_change..=max_change);
                let change_in_pe = rng.random_range(-max_change..=max_change);
                StrikeRecord::new(
                    price,
                    f64::from(ce),
                    f64::from(pe),
                    change_in_ce as f64,
                    change_in_pe as f64,
                )
            })
            .collect()
    }
}
