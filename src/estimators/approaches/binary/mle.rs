use crate::estimators::approaches::binary::binary_utils::{
    BinaryDataset, entropy_bits, safe_log2,
};
use crate::estimators::errors::Result;
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};
use ndarray::Array1;

/// Shannon entropy estimator for binary data using maximum likelihood (base 2).
///
/// This baseline estimator computes H = -Σ p_v log2 p_v from empirical
/// probabilities p_v = n_v/N over the two-symbol alphabet {0, 1}.
/// It supports local values via LocalValues, where each sample contributes
/// -log2 p(x).
pub struct BinaryEntropy {
    dataset: BinaryDataset,
}

impl BinaryEntropy {
    pub fn new(data: Array1<i32>) -> Result<Self> {
        let dataset = BinaryDataset::from_data(data)?;
        Ok(Self { dataset })
    }
}

impl LocalValues for BinaryEntropy {
    /// Calculate local entropy values for each element in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // Map each value to its probability: local = -log2 p(x)
        let p_local = self.dataset.map_probs();
        -p_local.mapv(safe_log2)
    }
}

impl GlobalValue for BinaryEntropy {
    /// Calculate global entropy for the data set, in bits.
    fn global_value(&self) -> f64 {
        entropy_bits(&self.dataset.distribution())
    }
}

impl OptionalLocalValues for BinaryEntropy {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
