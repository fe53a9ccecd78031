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

//! Sales transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewest transactions generated for one day of sales.
pub const MIN_SALES_PER_DAY: u32 = 10;

/// Most transactions generated for one day of sales.
pub const MAX_SALES_PER_DAY: u32 = 50;

/// Upper bound on the number of transactions in `days` days of sales.
///
/// Saturates instead of overflowing, so the result can always be checked
/// against a record ceiling.
///
/// # Examples
///
/// ```
/// use stockpulse_core::max_sales_records;
///
/// assert_eq!(max_sales_records(30), 1500);
/// assert_eq!(max_sales_records(usize::MAX), usize::MAX);
/// ```
pub fn max_sales_records(days: usize) -> usize {
    days.saturating_mul(MAX_SALES_PER_DAY as usize)
}

/// Channel through which a sale was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesChannel {
    Online,
    Retail,
    Wholesale,
}

impl SalesChannel {
    pub const ALL: [SalesChannel; 3] = [Self::Online, Self::Retail, Self::Wholesale];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
        }
    }
}

impl fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the buyer has purchased before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    New,
    Returning,
}

/// A single sale of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTransaction {
    /// `SALE-YYYYMMDD-####`
    pub id: String,
    pub date: DateTime<Utc>,
    /// Sale amount, 2 decimals.
    pub amount: f64,
    pub quantity: u32,
    pub product_id: String,
    pub product_name: String,
    pub channel: SalesChannel,
    pub customer_type: CustomerType,
    pub region: String,
}
