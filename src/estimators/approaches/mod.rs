pub mod binary;

// Unified re-exports for common estimators so tests and users can import
// bitmeasure::estimators::approaches::* ergonomically.
pub use binary::BinaryMutualInformation;
pub use binary::mle::BinaryEntropy;
