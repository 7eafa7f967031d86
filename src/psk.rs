//! PSK modulation and hard-decision demodulation.

use num_complex::Complex;

use crate::{Bit, Error, Result, constellation::Constellation};

/// Maps groups of `log2(M)` bits onto PSK constellation points.
#[derive(Debug, Clone)]
pub struct PskModulator {
    constellation: Constellation,
}

impl PskModulator {
    /// `order` must be a power of two; `phase_offset` rotates the whole
    /// constellation (radians).
    pub fn new(order: usize, phase_offset: f64) -> Result<Self> {
        Ok(Self {
            constellation: Constellation::psk(order, phase_offset)?,
        })
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    pub fn bits_per_symbol(&self) -> usize {
        self.constellation.bits_per_symbol()
    }

    /// Maps `bits` to symbols, one symbol per MSB-first group of
    /// `log2(M)` bits, preserving order.
    pub fn modulate(&self, bits: &[Bit]) -> Result<Vec<Complex<f64>>> {
        let bits_per_symbol = self.constellation.bits_per_symbol();
        if bits.len() % bits_per_symbol != 0 {
            return Err(Error::InvalidInput(format!(
                "bit count {} is not a multiple of {bits_per_symbol} (bits per symbol)",
                bits.len()
            )));
        }

        Ok(bits
            .chunks_exact(bits_per_symbol)
            .map(|chunk| {
                let label = chunk.iter().fold(0, |acc, &bit| (acc << 1) | bit as usize);
                self.constellation.point_for_label(label)
            })
            .collect())
    }
}

/// Recovers bits from received symbols by minimum-distance decision.
///
/// Must share `{order, phase_offset}` with the transmitting
/// [`PskModulator`] for the labels to line up.
#[derive(Debug, Clone)]
pub struct PskDemodulator {
    constellation: Constellation,
}

impl PskDemodulator {
    pub fn new(order: usize, phase_offset: f64) -> Result<Self> {
        Ok(Self {
            constellation: Constellation::psk(order, phase_offset)?,
        })
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    pub fn bits_per_symbol(&self) -> usize {
        self.constellation.bits_per_symbol()
    }

    /// Hard decision: each symbol becomes the bit label of its nearest
    /// constellation point, emitted MSB-first in input order.
    pub fn demodulate(&self, symbols: &[Complex<f64>]) -> Vec<Bit> {
        let bits_per_symbol = self.constellation.bits_per_symbol();
        symbols
            .iter()
            .flat_map(|&symbol| {
                let label = self.constellation.label_of(self.constellation.nearest(symbol));
                (0..bits_per_symbol).rev().map(move |i| (label >> i) & 1 == 1)
            })
            .collect()
    }

    /// Like [`Self::demodulate`], but fails when `symbols` cannot decode to
    /// exactly `num_bits` bits. Callers that know the transmitted payload
    /// length use this to catch truncated or padded receptions.
    pub fn demodulate_exact(
        &self,
        symbols: &[Complex<f64>],
        num_bits: usize,
    ) -> Result<Vec<Bit>> {
        let decoded = symbols.len() * self.constellation.bits_per_symbol();
        if decoded != num_bits {
            return Err(Error::InvalidInput(format!(
                "{} received symbols decode to {decoded} bits, expected {num_bits}",
                symbols.len()
            )));
        }
        Ok(self.demodulate(symbols))
    }
}
