//! Utility functions for sizing Bloom filters
//!
//! The filter itself never picks its own parameters; these helpers are for
//! callers who know roughly how many keys they will insert.

use crate::error::{BloomError, Result};

/// Calculated Bloom filter parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BloomParameters {
    /// Buffer size to pass to `BloomFilter::new`
    pub bytes: usize,
    /// Probe count to pass to `BloomFilter::new`
    pub hashes: u32,
    /// False positive rate expected after inserting `expected_elements` keys
    pub expected_fpr: f64,
}

/// Theoretical false positive rate after inserting `n` distinct keys:
/// `(1 - e^(-hashes * n / bits))^hashes`
pub fn theoretical_fpr(bits: usize, hashes: u32, n: usize) -> f64 {
    if bits == 0 {
        return 1.0;
    }
    let k = hashes as f64;
    (1.0 - (-k * n as f64 / bits as f64).exp()).powi(hashes as i32)
}

/// Calculate Bloom filter parameters for `expected_elements` keys at a
/// target false positive rate
pub fn optimal_bloom_parameters(
    expected_elements: usize,
    desired_fpr: f64,
) -> Result<BloomParameters> {
    if !(desired_fpr > 0.0 && desired_fpr < 1.0) {
        return Err(BloomError::InvalidParameter(format!(
            "False positive rate must be in (0, 1), got {}",
            desired_fpr
        )));
    }

    if expected_elements == 0 {
        return Ok(BloomParameters {
            bytes: 1,
            hashes: 1,
            expected_fpr: 0.0,
        });
    }

    let n = expected_elements as f64;

    // Optimal number of bits: m = -n * ln(p) / (ln(2))^2
    let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
    let optimal_bits = (-n * desired_fpr.ln() / ln2_squared).ceil() as usize;
    let bytes = ((optimal_bits + 7) / 8).max(1);

    // Optimal number of hash functions: k = (m/n) * ln(2)
    let m = (bytes * 8) as f64;
    let hashes = ((m / n) * std::f64::consts::LN_2).round().clamp(1.0, 32.0) as u32;

    Ok(BloomParameters {
        bytes,
        hashes,
        expected_fpr: theoretical_fpr(bytes * 8, hashes, expected_elements),
    })
}
