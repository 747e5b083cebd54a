//! Weight initialization.
//!
//! All randomness flows through one caller-owned generator, so a network
//! built from [`seeded_rng`] with the same seed is reproducible.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use crate::error::NnError;

/// Creates the deterministic generator used to initialize parameters.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Distribution that weight and bias values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform { low: -1.0, high: 1.0 }
    }
}

impl Init {
    /// Checks the parameters without drawing anything.
    pub fn validate(&self) -> Result<(), NnError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && (high - low).is_finite()) || low >= high {
                    return Err(NnError::InvalidInit(format!(
                        "uniform bounds must be finite with low < high and a finite width, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(NnError::InvalidInit(format!(
                        "normal parameters must be finite with std_dev >= 0, got mean={} std_dev={}",
                        mean, std_dev
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NnError> {
        self.validate()?;
        match *self {
            Init::Uniform { low, high } => Ok(Uniform::new(low, high).sample(rng)),
            Init::Normal { mean, std_dev } => {
                let normal = Normal::new(mean, std_dev).map_err(|e| NnError::InvalidInit(e.to_string()))?;
                Ok(normal.sample(rng))
            }
        }
    }

    /// Draws `count` values from the same generator.
    pub fn sample_n<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<f64>, NnError> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
