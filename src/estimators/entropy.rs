use crate::estimators::approaches::binary;
use crate::estimators::errors::Result;
use ndarray::Array1;
pub use crate::estimators::traits::LocalValues;

/// Entropy estimation methods for binary data
///
/// This struct provides static methods for creating entropy estimators
/// for binary (0/1) series.
pub struct Entropy;

impl Entropy {
    /// Creates a new Shannon entropy estimator for a 1D binary series
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of binary (0/1) data
    ///
    /// # Returns
    ///
    /// A binary entropy estimator configured for the provided data, or an
    /// error if the series is empty or contains a value outside {0, 1}
    pub fn new_binary(data: Array1<i32>) -> Result<binary::mle::BinaryEntropy> {
        binary::mle::BinaryEntropy::new(data)
    }
}
