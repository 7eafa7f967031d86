//! AWGN channel simulation.
//!
//! The channel perturbs every symbol with one independent complex Gaussian
//! draw. Noise power is derived from a linear signal-to-noise ratio and a
//! declared reference signal power, and splits evenly between the real and
//! imaginary dimensions.

use num_complex::Complex;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct AwgnChannel {
    noise_power: f64,
    per_dimension: Normal<f64>,
}

impl AwgnChannel {
    /// Creates a channel with `noise_power = signal_power / snr`.
    ///
    /// `snr` is linear and must be positive; `snr = ∞` yields a noiseless
    /// channel. `signal_power` is the expected average energy per symbol
    /// and must be positive and finite.
    pub fn new(snr: f64, signal_power: f64) -> Result<Self> {
        if !(snr > 0f64) {
            return Err(Error::InvalidConfiguration(format!(
                "snr must be positive, got {snr}"
            )));
        }
        if !(signal_power > 0f64) || !signal_power.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "signal power must be positive and finite, got {signal_power}"
            )));
        }

        let noise_power = signal_power / snr;
        let per_dimension = Normal::new(0f64, (noise_power / 2f64).sqrt())
            .map_err(|err| Error::RandomSource(err.to_string()))?;

        Ok(Self {
            noise_power,
            per_dimension,
        })
    }

    /// Channel with the unit reference signal power.
    pub fn with_snr(snr: f64) -> Result<Self> {
        Self::new(snr, 1f64)
    }

    /// Total complex noise variance per symbol.
    pub fn noise_power(&self) -> f64 {
        self.noise_power
    }

    /// Adds one fresh complex noise draw per symbol, unseeded.
    pub fn apply(&self, symbols: &[Complex<f64>]) -> Vec<Complex<f64>> {
        self.apply_with(&mut rand::rng(), symbols)
    }

    /// Same as [`Self::apply`], drawing noise from a caller-supplied
    /// generator so runs can be reproduced.
    pub fn apply_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        symbols: &[Complex<f64>],
    ) -> Vec<Complex<f64>> {
        symbols
            .iter()
            .map(|&symbol| {
                symbol
                    + Complex::new(
                        self.per_dimension.sample(rng),
                        self.per_dimension.sample(rng),
                    )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    #[rstest]
    #[case(0f64, 1f64)]
    #[case(-2f64, 1f64)]
    #[case(f64::NAN, 1f64)]
    #[case(1f64, 0f64)]
    #[case(1f64, -1f64)]
    #[case(1f64, f64::INFINITY)]
    fn rejects_bad_parameters(#[case] snr: f64, #[case] signal_power: f64) {
        assert!(matches!(
            AwgnChannel::new(snr, signal_power),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn noise_power_follows_snr() {
        let channel = AwgnChannel::new(4f64, 2f64).unwrap();
        assert_approx_eq!(channel.noise_power(), 0.5);
        assert_approx_eq!(AwgnChannel::with_snr(0.99).unwrap().noise_power(), 1.0 / 0.99);
    }

    #[test]
    fn infinite_snr_is_the_identity() {
        let channel = AwgnChannel::with_snr(f64::INFINITY).unwrap();
        let symbols = vec![Complex::new(0.6, -0.8); 1024];
        assert_eq!(channel.apply(&symbols), symbols);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let channel = AwgnChannel::with_snr(1f64).unwrap();
        let symbols = vec![Complex::new(1f64, 0f64); 256];

        let first = channel.apply_with(&mut StdRng::seed_from_u64(99), &symbols);
        let second = channel.apply_with(&mut StdRng::seed_from_u64(99), &symbols);
        assert_eq!(first, second);
    }

    #[test]
    fn draws_are_fresh_per_call() {
        let channel = AwgnChannel::with_snr(1f64).unwrap();
        let symbols = vec![Complex::new(1f64, 0f64); 256];
        let mut rng = StdRng::seed_from_u64(7);

        let first = channel.apply_with(&mut rng, &symbols);
        let second = channel.apply_with(&mut rng, &symbols);
        assert_ne!(first, second);
    }
}
