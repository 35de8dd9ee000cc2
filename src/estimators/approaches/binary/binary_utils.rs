use crate::estimators::errors::{EstimatorError, Result};
use ndarray::Array1;

/// Base-2 logarithm with an explicit convention for zero input.
///
/// Returns 0.0 for an exact-zero input so that entropy terms of the form
/// `p * log2(p)` vanish at p = 0 instead of producing `0 * -inf = NaN`.
/// Inputs are expected to be probabilities in `[0, 1]`; negative input is
/// outside the domain and inherits `f64::log2` behaviour (NaN).
#[inline]
pub fn safe_log2(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.log2() }
}

/// Shannon entropy in bits of a probability distribution.
///
/// Zero-probability entries contribute nothing via [`safe_log2`].
pub fn entropy_bits(probs: &[f64]) -> f64 {
    let mut h = 0.0_f64;
    for &p in probs {
        h -= p * safe_log2(p);
    }
    h
}

/// Map a series element to a table index, rejecting anything outside {0, 1}.
fn bit_index(series: &'static str, index: usize, value: i32) -> Result<usize> {
    match value {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(EstimatorError::NonBinaryValue {
            series,
            index,
            value,
        }),
    }
}

/// Shared dataset for single-series binary estimators.
pub struct BinaryDataset {
    /// Original binary data (1D)
    pub data: Array1<i32>,
    /// Total number of observations
    pub n: usize,
    /// Count of observations equal to 1
    pub ones: usize,
}

impl BinaryDataset {
    /// Build a BinaryDataset from raw 1D data, validating every element.
    pub fn from_data(data: Array1<i32>) -> Result<Self> {
        if data.is_empty() {
            return Err(EstimatorError::EmptyInput);
        }
        let mut ones = 0usize;
        for (i, &v) in data.iter().enumerate() {
            ones += bit_index("data", i, v)?;
        }
        let n = data.len();
        Ok(Self { data, n, ones })
    }

    /// Empirical distribution [p(0), p(1)].
    pub fn distribution(&self) -> [f64; 2] {
        let n_f = self.n as f64;
        [
            (self.n - self.ones) as f64 / n_f,
            self.ones as f64 / n_f,
        ]
    }

    /// Map each sample to its probability under the empirical distribution.
    pub fn map_probs(&self) -> Array1<f64> {
        let dist = self.distribution();
        self.data.mapv(|v| dist[v as usize])
    }
}

/// Shared dataset for paired-series binary estimators.
///
/// All four joint cells are tallied directly in a single pass over the
/// paired observations; marginal counts are recovered from the joint table.
pub struct BinaryPairDataset {
    /// First binary series (1D)
    pub x: Array1<i32>,
    /// Second binary series (1D)
    pub y: Array1<i32>,
    /// Total number of paired observations
    pub n: usize,
    /// Joint counts indexed by (x value, y value)
    pub joint_counts: [[usize; 2]; 2],
}

impl BinaryPairDataset {
    /// Build a BinaryPairDataset from two raw 1D series.
    ///
    /// Lengths and every element are validated before any count is used,
    /// so construction either yields a consistent dataset or a typed error.
    pub fn from_pair(x: Array1<i32>, y: Array1<i32>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(EstimatorError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(EstimatorError::EmptyInput);
        }
        let mut joint_counts = [[0usize; 2]; 2];
        for (i, (&xv, &yv)) in x.iter().zip(y.iter()).enumerate() {
            let xi = bit_index("x", i, xv)?;
            let yi = bit_index("y", i, yv)?;
            joint_counts[xi][yi] += 1;
        }
        let n = x.len();
        Ok(Self {
            x,
            y,
            n,
            joint_counts,
        })
    }

    /// Marginal distribution [p(x=0), p(x=1)].
    pub fn marginal_x(&self) -> [f64; 2] {
        let ones = self.joint_counts[1][0] + self.joint_counts[1][1];
        let n_f = self.n as f64;
        [(self.n - ones) as f64 / n_f, ones as f64 / n_f]
    }

    /// Marginal distribution [p(y=0), p(y=1)].
    pub fn marginal_y(&self) -> [f64; 2] {
        let ones = self.joint_counts[0][1] + self.joint_counts[1][1];
        let n_f = self.n as f64;
        [(self.n - ones) as f64 / n_f, ones as f64 / n_f]
    }

    /// Joint distribution table indexed by (x value, y value).
    /// The four cells sum to 1 up to floating-point rounding.
    pub fn joint(&self) -> [[f64; 2]; 2] {
        let n_f = self.n as f64;
        let mut p = [[0.0_f64; 2]; 2];
        for a in 0..2 {
            for b in 0..2 {
                p[a][b] = self.joint_counts[a][b] as f64 / n_f;
            }
        }
        p
    }
}
