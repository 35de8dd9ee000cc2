use crate::estimators::approaches::binary;
use crate::estimators::errors::Result;
use ndarray::Array1;

/// Mutual information estimation methods for binary data
///
/// This struct provides static methods for creating mutual information
/// estimators over paired binary (0/1) series.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a new mutual information estimator for two paired binary series
    ///
    /// # Arguments
    ///
    /// * `x` - First one-dimensional array of binary (0/1) data
    /// * `y` - Second one-dimensional array of binary (0/1) data, same length
    ///
    /// # Returns
    ///
    /// A binary mutual information estimator, or an error if the series are
    /// empty, have different lengths, or contain a value outside {0, 1}
    pub fn new_binary(
        x: Array1<i32>,
        y: Array1<i32>,
    ) -> Result<binary::BinaryMutualInformation> {
        binary::BinaryMutualInformation::new(x, y)
    }

    /// Creates the estimator from plain slices, copying into owned arrays.
    /// The series length is taken from the slices themselves.
    pub fn binary_from_slices(
        x: &[i32],
        y: &[i32],
    ) -> Result<binary::BinaryMutualInformation> {
        binary::BinaryMutualInformation::new(
            Array1::from(x.to_vec()),
            Array1::from(y.to_vec()),
        )
    }
}
