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

//! Generator configuration.
//!
//! [`SynthConfig`] holds the tunable knobs shared by every generator: default
//! collection sizes used when one generator builds another's backing data,
//! the expiry model for inventory, and the record count ceiling. The record
//! shapes and value ranges themselves are fixed.

use crate::error::{validate_count, Result, SynthError, MAX_COUNT};
use crate::sales::max_sales_records;
use serde::{Deserialize, Serialize};

/// Configuration for synthetic data generation.
///
/// All fields have defaults, so a partial YAML or JSON document is enough:
///
/// ```
/// use stockpulse_core::SynthConfig;
///
/// let config: SynthConfig = serde_json::from_str(r#"{"expiryProbability": 0.5}"#).unwrap();
/// assert_eq!(config.expiry_probability, 0.5);
/// assert_eq!(config.default_inventory_count, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SynthConfig {
    /// Size of the inventory set that sales, orders, alerts and predictions
    /// draw from when they generate their own backing data.
    pub default_inventory_count: usize,
    /// Number of days of sales generated for dashboard metrics.
    pub default_sales_days: usize,
    /// Number of orders generated for alerts and dashboard metrics.
    pub default_order_count: usize,
    /// Probability that an inventory item carries an expiry date.
    pub expiry_probability: f64,
    /// How far in the past an expiry date may fall, in days.
    ///
    /// Items whose expiry date is already past are reported as expired.
    /// Zero disables expired items entirely.
    pub expired_lookback_days: u32,
    /// Maximum number of delivery-delay alerts raised per alert scan.
    pub max_delay_alerts: usize,
    /// Ceiling on any requested record count.
    pub max_count: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            default_inventory_count: 50,
            default_sales_days: 30,
            default_order_count: 100,
            expiry_probability: 0.3,
            expired_lookback_days: 30,
            max_delay_alerts: 5,
            max_count: MAX_COUNT,
        }
    }
}

impl SynthConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backing inventory size.
    pub fn with_inventory_count(mut self, count: usize) -> Self {
        self.default_inventory_count = count;
        self
    }

    /// Sets the number of sales days used for dashboard metrics.
    pub fn with_sales_days(mut self, days: usize) -> Self {
        self.default_sales_days = days;
        self
    }

    /// Sets the backing order count.
    pub fn with_order_count(mut self, count: usize) -> Self {
        self.default_order_count = count;
        self
    }

    /// Sets the expiry probability.
    pub fn with_expiry_probability(mut self, probability: f64) -> Self {
        self.expiry_probability = probability;
        self
    }

    /// Sets the expiry lookback window in days.
    pub fn with_expired_lookback_days(mut self, days: u32) -> Self {
        self.expired_lookback_days = days;
        self
    }

    /// Sets the delivery-delay alert cap.
    pub fn with_max_delay_alerts(mut self, max: usize) -> Self {
        self.max_delay_alerts = max;
        self
    }

    /// Sets the record count ceiling.
    pub fn with_max_count(mut self, max: usize) -> Self {
        self.max_count = max;
        self
    }

    /// Check every parameter against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidConfig`] naming the first offending
    /// parameter, or [`SynthError::CountTooLarge`] when a default count
    /// exceeds `max_count`. Sales days are checked by the most transactions
    /// they can produce.
    pub fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(SynthError::invalid_config("maxCount", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.expiry_probability) {
            return Err(SynthError::invalid_config(
                "expiryProbability",
                format!("must be within [0, 1], got {}", self.expiry_probability),
            ));
        }
        if self.default_inventory_count == 0 {
            // Sales and orders pick products from this set.
            return Err(SynthError::invalid_config(
                "defaultInventoryCount",
                "must be positive",
            ));
        }
        validate_count(self.default_inventory_count, self.max_count)?;
        validate_count(self.default_order_count, self.max_count)?;
        validate_count(max_sales_records(self.default_sales_days), self.max_count)?;
        Ok(())
    }
}
