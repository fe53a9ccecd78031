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

//! StockPulse Core
//!
//! Data model, configuration and error types shared by the StockPulse
//! synthetic warehouse data toolkit.
//!
//! ## Records
//!
//! - [`InventoryItem`] with its derived [`StockStatus`]
//! - [`SalesTransaction`]
//! - [`Order`] and [`OrderItem`]
//! - [`Alert`]
//! - [`PredictionData`] and the [`replenishment`] rule
//! - [`BottleneckData`], [`DashboardMetrics`], [`PerformanceMetrics`] and
//!   [`TimeSeriesPoint`]
//!
//! Every record serializes with camelCase field names and snake_case enum
//! values.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use stockpulse_core::{replenishment, StockStatus};
//!
//! let status = StockStatus::derive(4, 20, None, Utc::now());
//! assert_eq!(status, StockStatus::LowStock);
//!
//! let plan = replenishment(4, 100, 20);
//! assert_eq!(plan.recommended_order, 116);
//! ```

pub mod alert;
pub mod config;
pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod prediction;
pub mod sales;
pub mod warehouse;

pub use alert::{Alert, AlertType, Severity};
pub use config::SynthConfig;
pub use error::{validate_count, Result, SynthError, MAX_COUNT};
pub use inventory::{InventoryItem, StockStatus, StockUnit};
pub use money::{round_cents, round_to};
pub use order::{Order, OrderItem, OrderStatus};
pub use prediction::{
    replenishment, PredictionData, Replenishment, Seasonality, Trend, NO_FORESEEABLE_STOCKOUT,
    PREDICTION_HORIZON_DAYS,
};
pub use sales::{
    max_sales_records, CustomerType, SalesChannel, SalesTransaction, MAX_SALES_PER_DAY,
    MIN_SALES_PER_DAY,
};
pub use warehouse::{
    BottleneckData, BottleneckSeverity, BottleneckType, DashboardMetrics, PerformanceMetrics,
    SeriesKind, ThroughputMetrics, TimeSeriesPoint,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
