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

//! Inventory records and stock status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock status of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Above the minimum stock level.
    InStock,
    /// At or below the minimum stock level, but not empty.
    LowStock,
    /// No units on hand.
    OutOfStock,
    /// Expiry date has passed. Overrides every stock-based status.
    Expired,
}

impl StockStatus {
    /// Every status, in display order.
    pub const ALL: [StockStatus; 4] = [
        Self::InStock,
        Self::LowStock,
        Self::OutOfStock,
        Self::Expired,
    ];

    /// Derive the status of an item from its stock and expiry date.
    ///
    /// Precedence: `Expired` when `expiry_date` is before `now`, otherwise
    /// `OutOfStock` at zero stock, otherwise `LowStock` at or below
    /// `min_stock_level`, otherwise `InStock`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use stockpulse_core::StockStatus;
    ///
    /// let now = Utc::now();
    /// assert_eq!(StockStatus::derive(0, 10, None, now), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::derive(10, 10, None, now), StockStatus::LowStock);
    /// assert_eq!(StockStatus::derive(11, 10, None, now), StockStatus::InStock);
    ///
    /// let yesterday = now - Duration::days(1);
    /// assert_eq!(StockStatus::derive(0, 10, Some(yesterday), now), StockStatus::Expired);
    /// ```
    pub fn derive(
        current_stock: u32,
        min_stock_level: u32,
        expiry_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        match expiry_date {
            Some(expiry) if expiry < now => Self::Expired,
            _ if current_stock == 0 => Self::OutOfStock,
            _ if current_stock <= min_stock_level => Self::LowStock,
            _ => Self::InStock,
        }
    }

    /// Wire name (`in_stock`, `low_stock`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit in which an item is stocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockUnit {
    /// Pieces.
    Pcs,
    /// Kilograms.
    Kg,
}

impl fmt::Display for StockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pcs => f.write_str("pcs"),
            Self::Kg => f.write_str("kg"),
        }
    }
}

/// A stocked product at a warehouse location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// `INV-####`
    pub id: String,
    pub name: String,
    /// `SKU-######`
    pub sku: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub unit: StockUnit,
    /// Cost per unit, 2 decimals.
    pub unit_cost: f64,
    /// Bin location, e.g. `A1-02`.
    pub location: String,
    pub supplier: String,
    pub last_restocked: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Value of the stock on hand (`current_stock * unit_cost`).
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_stock) * self.unit_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expired_overrides_stock() {
        let now = Utc::now();
        let past = now - Duration::minutes(1);
        for stock in [0, 5, 500] {
            assert_eq!(
                StockStatus::derive(stock, 10, Some(past), now),
                StockStatus::Expired
            );
        }
    }

    #[test]
    fn test_future_expiry_keeps_stock_status() {
        let now = Utc::now();
        let future = now + Duration::days(30);
        assert_eq!(
            StockStatus::derive(0, 10, Some(future), now),
            StockStatus::OutOfStock
        );
        assert_eq!(
            StockStatus::derive(200, 10, Some(future), now),
            StockStatus::InStock
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
        for status in StockStatus::ALL {
            assert_eq!(format!("\"{}\"", status), serde_json::to_string(&status).unwrap());
        }
    }
}
