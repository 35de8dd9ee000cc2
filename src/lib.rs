// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # bitmeasure
//!
//! Rust library for estimating the mutual information between two
//! binary-valued series from empirical probabilities, using Shannon
//! entropy in base 2.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitmeasure::estimators::entropy::Entropy;
//! use bitmeasure::estimators::mutual_information::MutualInformation;
//! use bitmeasure::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! // Mutual information between two paired binary series, in bits
//! let x = array![0, 0, 1, 1];
//! let y = array![0, 1, 0, 1];
//! let mi = MutualInformation::new_binary(x, y).unwrap().global_value();
//!
//! // Marginal entropy of a single binary series
//! let h = Entropy::new_binary(array![0, 1, 1, 0]).unwrap().global_value();
//! ```
//!
//! ## Estimation Approach
//!
//! Probabilities are estimated by maximum likelihood: a single pass over
//! the paired observations tallies the 2x2 joint count table, marginal
//! distributions are recovered from the joint counts, and the measure is
//! combined from three entropy terms, $I(X;Y) = H(X) + H(Y) - H(X,Y)$.
//! Zero-probability cells contribute nothing to the sums via a
//! zero-guarded base-2 logarithm, so results are finite for all valid
//! inputs.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory types (`Entropy`, `MutualInformation`)
//! 2. **Estimation Approaches**: Binary (two-symbol alphabet) estimators
//! 3. **Core Infrastructure**: Shared traits, datasets and error types
//!
//! ## Input Validation
//!
//! Constructors validate their inputs eagerly and return a typed
//! [`estimators::errors::EstimatorError`] for empty series, mismatched
//! lengths, or elements outside `{0, 1}`, instead of NaN or a silently
//! wrong value.

pub mod estimators;
