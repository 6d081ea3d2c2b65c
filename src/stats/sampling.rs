//! Monte Carlo averaging
//!
//! Estimates the expected value of a stochastic function by repeated
//! sampling.

use crate::core::turn::InvalidArgument;

/// Default number of samples for an estimate
pub const DEFAULT_SAMPLES: u32 = 1000;

/// Wrap a sampler into a closure returning its mean over `num_samples` runs
///
/// The returned closure calls `f` exactly `num_samples` times per
/// invocation and returns the arithmetic mean of the results. Samplers with
/// arguments close over them.
///
/// # Errors
/// Returns [`InvalidArgument::NoSamples`] when `num_samples` is 0.
///
/// # Examples
/// ```
/// use hog_sim::core::{Dice, TestDice};
/// use hog_sim::stats::make_averaged;
///
/// let mut dice = TestDice::new([3, 1, 5, 6]);
/// let mut averaged = make_averaged(|| f64::from(dice.roll()), 1000).unwrap();
/// assert!((averaged() - 3.75).abs() < 1e-9);
/// ```
pub fn make_averaged<F>(
    mut f: F,
    num_samples: u32,
) -> Result<impl FnMut() -> f64, InvalidArgument>
where
    F: FnMut() -> f64,
{
    if num_samples == 0 {
        return Err(InvalidArgument::NoSamples);
    }

    Ok(move || {
        let mut total = 0.0;
        for _ in 0..num_samples {
            total += f();
        }
        total / f64::from(num_samples)
    })
}
