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

//! Demand predictions and the replenishment rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `days_until_stock_out` value meaning no stockout is foreseeable within
/// the prediction horizon.
pub const NO_FORESEEABLE_STOCKOUT: u32 = 999;

/// Days covered by a demand prediction.
pub const PREDICTION_HORIZON_DAYS: u32 = 30;

/// Direction of recent demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Self::Increasing, Self::Decreasing, Self::Stable];
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        })
    }
}

/// How strongly demand depends on the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seasonality {
    High,
    Medium,
    Low,
}

impl Seasonality {
    pub const ALL: [Seasonality; 3] = [Self::High, Self::Medium, Self::Low];
}

/// Predicted demand for one product over the next 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionData {
    pub product_id: String,
    pub product_name: String,
    pub current_stock: u32,
    pub predicted_demand: u32,
    pub recommended_order: u32,
    /// Model confidence in `[0.6, 1.0]`, 2 decimals.
    pub confidence: f64,
    /// Days until stock runs out; [`NO_FORESEEABLE_STOCKOUT`] if stock covers
    /// the predicted demand.
    pub days_until_stock_out: u32,
    pub trend: Trend,
    pub seasonality: Seasonality,
}

impl PredictionData {
    /// Whether stock is expected to run out within the horizon.
    pub fn has_foreseeable_stockout(&self) -> bool {
        self.days_until_stock_out != NO_FORESEEABLE_STOCKOUT
    }
}

/// Outcome of [`replenishment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replenishment {
    pub recommended_order: u32,
    pub days_until_stock_out: u32,
}

/// Compute the reorder quantity and stockout horizon for a product.
///
/// When `current_stock` falls short of `predicted_demand`, the recommended
/// order refills to the demand plus the safety level
/// (`predicted_demand - current_stock + min_stock_level`), and the stock
/// lasts `floor(current_stock / (predicted_demand / 30))` days, never less
/// than one. Otherwise nothing is ordered and no stockout is foreseen.
/// The recommended order saturates at `u32::MAX`.
///
/// # Examples
///
/// ```
/// use stockpulse_core::{replenishment, NO_FORESEEABLE_STOCKOUT};
///
/// let r = replenishment(50, 150, 20);
/// assert_eq!(r.recommended_order, 120);
/// assert_eq!(r.days_until_stock_out, 10);
///
/// let r = replenishment(300, 150, 20);
/// assert_eq!(r.recommended_order, 0);
/// assert_eq!(r.days_until_stock_out, NO_FORESEEABLE_STOCKOUT);
/// ```
pub fn replenishment(current_stock: u32, predicted_demand: u32, min_stock_level: u32) -> Replenishment {
    if current_stock >= predicted_demand {
        return Replenishment {
            recommended_order: 0,
            days_until_stock_out: NO_FORESEEABLE_STOCKOUT,
        };
    }

    // Integer form of floor(stock / (demand / 30)); demand > stock >= 0 here.
    let days = u64::from(current_stock) * u64::from(PREDICTION_HORIZON_DAYS)
        / u64::from(predicted_demand);

    Replenishment {
        recommended_order: (predicted_demand - current_stock).saturating_add(min_stock_level),
        days_until_stock_out: (days as u32).max(1),
    }
}
