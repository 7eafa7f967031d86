//! PSK constellation geometry and bit labeling.
//!
//! The constellation is a plain ordered table: point `k` sits at angle
//! `phase_offset + 2πk/M` on the unit circle and carries the Gray code of
//! `k` as its bit label. A modulator and demodulator built from the same
//! `{order, phase_offset}` therefore agree on the mapping by construction.

use std::f64::consts::PI;

use itertools::Itertools;
use num_complex::Complex;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Constellation {
    points: Vec<Complex<f64>>,
    labels: Vec<usize>,
    index_by_label: Vec<usize>,
    bits_per_symbol: usize,
}

impl Constellation {
    /// Builds an M-ary PSK constellation rotated by `phase_offset` radians.
    ///
    /// `order` must be a power of two and at least 2.
    pub fn psk(order: usize, phase_offset: f64) -> Result<Self> {
        if order < 2 || !order.is_power_of_two() {
            return Err(Error::InvalidConfiguration(format!(
                "modulation order must be a power of 2 and at least 2, got {order}"
            )));
        }
        if !phase_offset.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "phase offset must be finite, got {phase_offset}"
            )));
        }

        let points = (0..order)
            .map(|k| {
                let angle = phase_offset + 2f64 * PI * k as f64 / order as f64;
                Complex::new(angle.cos(), angle.sin())
            })
            .collect();

        // Gray labels: adjacent points differ in exactly one bit.
        let labels: Vec<usize> = (0..order).map(|k| k ^ (k >> 1)).collect();
        let mut index_by_label = vec![0; order];
        for (index, &label) in labels.iter().enumerate() {
            index_by_label[label] = index;
        }

        Ok(Self {
            points,
            labels,
            index_by_label,
            bits_per_symbol: order.trailing_zeros() as usize,
        })
    }

    pub fn order(&self) -> usize {
        self.points.len()
    }

    pub fn bits_per_symbol(&self) -> usize {
        self.bits_per_symbol
    }

    pub fn points(&self) -> &[Complex<f64>] {
        &self.points
    }

    /// The point transmitted for a bit-chunk value (MSB-first).
    pub(crate) fn point_for_label(&self, label: usize) -> Complex<f64> {
        self.points[self.index_by_label[label]]
    }

    /// The bit label carried by point `index`.
    pub(crate) fn label_of(&self, index: usize) -> usize {
        self.labels[index]
    }

    /// Index of the constellation point closest to `symbol` in Euclidean
    /// distance. Equidistant candidates resolve to the lowest index.
    pub fn nearest(&self, symbol: Complex<f64>) -> usize {
        self.points
            .iter()
            .map(|&point| (symbol - point).norm_sqr())
            .position_min_by(|a, b| a.total_cmp(b))
            .unwrap_or(0)
    }
}
