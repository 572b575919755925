use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for the simulation.
///
/// Every stochastic decision in the engine goes through this type, so two engines
/// built from the same seed draw the same sequence as long as they make the same
/// calls in the same order.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: SmallRng,
    seed: u64,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.random_range(0.0..1.0)
    }

    /// Bernoulli trial. Always consumes exactly one draw, so `p = 0.0` and
    /// `p = 1.0` keep the stream aligned with intermediate probabilities.
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Integer-threshold draw: roll a `sides`-sided die (faces `0..sides`) and
    /// report whether the face is below `threshold`. `roll_below(1, 10)` is a
    /// one-in-ten roll. A zero-sided die never succeeds.
    pub fn roll_below(&mut self, threshold: u32, sides: u32) -> bool {
        if sides == 0 {
            return false;
        }
        self.rng.random_range(0..sides) < threshold
    }
}
