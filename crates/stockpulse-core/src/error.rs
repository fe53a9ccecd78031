// Dweve StockPulse - Synthetic Warehouse Data Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for synthetic data generation.

use thiserror::Error;

/// Default upper bound on any requested record count (1 million records).
///
/// Keeps a single generator call from allocating unbounded memory. The bound
/// can be lowered or raised per generator through
/// [`SynthConfig::max_count`](crate::SynthConfig).
pub const MAX_COUNT: usize = 1_000_000;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors that can occur while configuring or running a generator.
///
/// # Examples
///
/// ```
/// use stockpulse_core::SynthError;
///
/// let err = SynthError::CountTooLarge {
///     requested: 5_000_000,
///     max: 1_000_000,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Requested count 5000000 exceeds maximum allowed limit of 1000000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// Requested record count exceeds the configured limit.
    #[error("Requested count {requested} exceeds maximum allowed limit of {max}")]
    CountTooLarge {
        /// Requested count
        requested: usize,
        /// Maximum allowed count
        max: usize,
    },

    /// A configuration parameter is out of range.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A date offset falls outside the representable calendar.
    #[error("Date {days} days from the reference instant is out of range")]
    DateOutOfRange {
        /// Offset in days
        days: usize,
    },
}

impl SynthError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Validate that a record count is within `max`.
///
/// Zero is always accepted and means "generate nothing".
///
/// # Examples
///
/// ```
/// use stockpulse_core::{validate_count, MAX_COUNT};
///
/// assert!(validate_count(0, MAX_COUNT).is_ok());
/// assert!(validate_count(MAX_COUNT + 1, MAX_COUNT).is_err());
/// ```
#[inline]
pub fn validate_count(count: usize, max: usize) -> Result<()> {
    if count > max {
        Err(SynthError::CountTooLarge {
            requested: count,
            max,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_count_success() {
        assert!(validate_count(0, MAX_COUNT).is_ok());
        assert!(validate_count(50, MAX_COUNT).is_ok());
        assert!(validate_count(MAX_COUNT, MAX_COUNT).is_ok());
    }

    #[test]
    fn test_validate_count_failure() {
        match validate_count(11, 10) {
            Err(SynthError::CountTooLarge { requested, max }) => {
                assert_eq!(requested, 11);
                assert_eq!(max, 10);
            }
            other => panic!("Expected CountTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_date_out_of_range_display() {
        let err = SynthError::DateOutOfRange { days: 200_000_000 };
        assert_eq!(
            err.to_string(),
            "Date 200000000 days from the reference instant is out of range"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SynthError::invalid_config("expiry_probability", "must be within [0, 1]");
        let msg = err.to_string();
        assert!(msg.contains("expiry_probability"));
        assert!(msg.contains("must be within [0, 1]"));
    }
}
