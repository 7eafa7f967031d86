//! Simulation of a one-shot digital image transmission: a flat bit payload
//! is PSK-modulated onto complex baseband symbols, pushed through an AWGN
//! channel, and hard-decided back into bits.

use num_complex::Complex;
use rand::Rng;

pub mod channel;
pub mod constellation;
mod error;
pub mod psk;

pub use crate::error::{Error, Result};

pub type Bit = bool;

#[inline]
pub fn db(x: f64) -> f64 {
    10f64 * x.log10()
}

#[inline]
pub fn undb(x: f64) -> f64 {
    10f64.powf(x / 10f64)
}

#[inline]
pub fn erf(x: f64) -> f64 {
    let t: f64 = 1f64 / (1f64 + 0.5 * x.abs());
    let tau = t
        * (-x.powi(2) - 1.26551223
            + 1.00002368 * t
            + 0.37409196 * t.powi(2)
            + 0.09678418 * t.powi(3)
            - 0.18628806 * t.powi(4)
            + 0.27886807 * t.powi(5)
            - 1.13520398 * t.powi(6)
            + 1.48851587 * t.powi(7)
            - 0.82215223 * t.powi(8)
            + 0.17087277 * t.powi(9))
        .exp();
    if x >= 0f64 {
        1f64 - tau
    } else {
        tau - 1f64
    }
}

#[inline]
pub fn erfc(x: f64) -> f64 {
    1f64 - erf(x)
}

/// Fraction of positions where `tx` and `rx` disagree.
#[inline]
pub fn ber(tx: &[Bit], rx: &[Bit]) -> f64 {
    let len: usize = std::cmp::min(tx.len(), rx.len());
    let errors: usize = tx
        .iter()
        .zip(rx.iter())
        .filter(|&(&t_i, &r_i)| t_i != r_i)
        .count();
    (errors as f64) / (len as f64)
}

#[inline]
/// Calculates the energy per sample.
pub fn avg_energy(signal: &[Complex<f64>]) -> f64 {
    signal.iter().map(|&sample| sample.norm_sqr()).sum::<f64>() / signal.len() as f64
}

pub fn random_bits(num_bits: usize) -> Vec<Bit> {
    let mut rng = rand::rng();
    (0..num_bits).map(|_| rng.random()).collect()
}

/// Expands bytes into bits, most significant bit first.
pub fn unpack_bits(bytes: &[u8]) -> Vec<Bit> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

/// Packs bits into bytes, most significant bit first. A trailing partial
/// group fills the low bits of the last byte with zeros.
pub fn pack_bits(bits: &[Bit]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
            byte << (8 - chunk.len())
        })
        .collect()
}
