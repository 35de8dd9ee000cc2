// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binary estimators module: groups the binary-related submodules
// and exposes them to the parent approaches module.

pub mod binary_utils;
pub mod mle;

use crate::estimators::approaches::binary::binary_utils::{
    BinaryPairDataset, entropy_bits, safe_log2,
};
use crate::estimators::errors::Result;
use crate::estimators::traits::{
    GlobalValue, LocalValues, MutualInformationEstimator, OptionalLocalValues,
};
use ndarray::Array1;

/// Binary Mutual Information estimator using the entropy-summation formula.
///
/// Estimates I(X; Y) = H(X) + H(Y) - H(X, Y) in bits from the empirical
/// marginal and joint distributions of two paired binary series. All
/// probabilities fed to the entropy sums lie in [0, 1], so the result is
/// finite for every valid input; mathematically it is non-negative up to
/// floating-point rounding.
pub struct BinaryMutualInformation {
    dataset: BinaryPairDataset,
}

impl BinaryMutualInformation {
    pub fn new(x: Array1<i32>, y: Array1<i32>) -> Result<Self> {
        let dataset = BinaryPairDataset::from_pair(x, y)?;
        Ok(Self { dataset })
    }

    /// Marginal entropies (H(X), H(Y)) in bits.
    pub fn marginal_entropies(&self) -> (f64, f64) {
        (
            entropy_bits(&self.dataset.marginal_x()),
            entropy_bits(&self.dataset.marginal_y()),
        )
    }

    /// Joint entropy H(X, Y) in bits.
    pub fn joint_entropy(&self) -> f64 {
        let p = self.dataset.joint();
        entropy_bits(&[p[0][0], p[0][1], p[1][0], p[1][1]])
    }
}

impl GlobalValue for BinaryMutualInformation {
    fn global_value(&self) -> f64 {
        let (h_x, h_y) = self.marginal_entropies();
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        h_x + h_y - self.joint_entropy()
    }
}

impl LocalValues for BinaryMutualInformation {
    /// Pointwise mutual information per sample,
    /// i(x, y) = log2( p(x, y) / (p(x) p(y)) ).
    fn local_values(&self) -> Array1<f64> {
        let px = self.dataset.marginal_x();
        let py = self.dataset.marginal_y();
        let pxy = self.dataset.joint();
        // Every observed cell has a non-zero count, so the logs are finite.
        let vals: Vec<f64> = self
            .dataset
            .x
            .iter()
            .zip(self.dataset.y.iter())
            .map(|(&xv, &yv)| {
                let (a, b) = (xv as usize, yv as usize);
                safe_log2(pxy[a][b]) - safe_log2(px[a]) - safe_log2(py[b])
            })
            .collect();
        Array1::from(vals)
    }
}

impl OptionalLocalValues for BinaryMutualInformation {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl MutualInformationEstimator for BinaryMutualInformation {}
