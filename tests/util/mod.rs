#![allow(dead_code)]
use bildkanalo::erfc;

/// Theoretical BPSK bit-error rate over AWGN.
pub fn ber_bpsk(eb_n0: f64) -> f64 {
    0.5 * erfc(eb_n0.sqrt())
}

/// Theoretical Gray-coded QPSK bit-error rate over AWGN. The I and Q rails
/// decide independently, so per bit it matches the BPSK curve.
pub fn ber_qpsk(eb_n0: f64) -> f64 {
    0.5 * erfc(eb_n0.sqrt())
}

/// Theoretical QPSK symbol-error rate over AWGN.
pub fn ser_qpsk(es_n0: f64) -> f64 {
    let q = 0.5 * erfc((es_n0 / 2f64).sqrt());
    2f64 * q - q.powi(2)
}
