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

//! StockPulse Analytics
//!
//! Views over warehouse records that are already held in memory. Nothing
//! here generates data: every function filters, counts, sorts or
//! summarizes the slice it is given, so repeated calls over the same
//! collection always agree.
//!
//! ## Modules
//!
//! - [`alerts`]: severity filtering, unresolved counts, read/resolve
//!   transitions
//! - [`predictions`]: urgency and confidence bands, filtering, sorting and
//!   the prediction summary
//! - [`sales`]: revenue totals and channel breakdown
//! - [`orders`]: order search and status counts
//! - [`inventory`]: stock status counts and category distribution
//! - [`bottlenecks`]: high-severity bottleneck count
//! - [`format`]: currency, percent change and relative time display
//!
//! ## Example
//!
//! ```
//! use stockpulse_analytics::predictions::{PredictionFilter, UrgencyLevel};
//! use stockpulse_analytics::predictions::PredictionSummary;
//! use stockpulse_synth::Generator;
//!
//! let predictions = Generator::seeded(5).generate_prediction_data().unwrap();
//! let critical = PredictionFilter::new()
//!     .with_urgency(UrgencyLevel::Critical)
//!     .apply(&predictions);
//! let summary = PredictionSummary::from_predictions(&predictions);
//!
//! assert!(critical.len() <= summary.urgent_items);
//! ```

pub mod alerts;
pub mod bottlenecks;
pub mod format;
pub mod inventory;
pub mod orders;
pub mod predictions;
pub mod sales;

pub use alerts::{mark_read, resolve, severity_counts, AlertFilter, SeverityCounts};
pub use bottlenecks::high_severity_count;
pub use format::{format_currency, format_time_ago, percent_change, ChangeDirection};
pub use inventory::{category_distribution, CategoryCount, StockStatusCounts};
pub use orders::{status_counts, OrderFilter, OrderStatusCounts};
pub use predictions::{
    sort_predictions, urgency_distribution, ConfidenceLevel, PredictionFilter, PredictionSortKey,
    PredictionSummary, UrgencyDistribution, UrgencyLevel,
};
pub use sales::{revenue_by_channel, ChannelRevenue, SalesSummary};
