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

//! StockPulse synthetic data generator
//!
//! Fabricates plausible warehouse data in memory from an injected, seedable
//! random source.
//!
//! ## Generators
//!
//! | Operation | Output |
//! |---|---|
//! | [`Generator::generate_inventory_data`] | inventory items with derived stock status |
//! | [`Generator::generate_sales_data`] | 10-50 sales per day over a number of days |
//! | [`Generator::generate_order_data`] | orders with 1-5 line items |
//! | [`Generator::generate_alerts`] | stock and delivery-delay alerts, newest first |
//! | [`Generator::generate_prediction_data`] | demand predictions, most urgent first |
//! | [`generate_bottleneck_data`] | four fixed bottleneck records |
//! | [`Generator::generate_dashboard_metrics`] | headline aggregates |
//! | [`Generator::generate_performance_metrics`] | six operational KPIs |
//! | [`Generator::generate_time_series_data`] | one chart point per day |
//!
//! ## Independent and shared datasets
//!
//! Top-level generators that depend on other records (sales, orders,
//! alerts, predictions, dashboard metrics) build their own backing inventory
//! and orders on every call. Two calls therefore never refer to the same
//! products, only to statistically similar ones. When several views must
//! agree, hold one dataset and use the `derive_*` methods,
//! [`summarize_dashboard`], or [`Snapshot`]:
//!
//! ```
//! use stockpulse_synth::{summarize_dashboard, Generator};
//!
//! let mut gen = Generator::seeded(42);
//! let inventory = gen.generate_inventory_data(50).unwrap();
//! let orders = gen.derive_orders(&inventory, 100).unwrap();
//! let alerts = gen.derive_alerts(&inventory, &orders);
//! let metrics = summarize_dashboard(gen.now(), &inventory, &[], &orders, &alerts);
//!
//! assert_eq!(metrics.total_products, 50);
//! ```
//!
//! ## Determinism
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use stockpulse_synth::Generator;
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
//! let a = Generator::seeded(9).with_now(now).generate_order_data(5).unwrap();
//! let b = Generator::seeded(9).with_now(now).generate_order_data(5).unwrap();
//! assert_eq!(a, b);
//! ```

mod alerts;
mod bottlenecks;
pub mod catalog;
mod generator;
mod inventory;
mod metrics;
mod orders;
mod predictions;
mod random;
mod sales;
mod snapshot;
mod timeseries;

pub use bottlenecks::generate_bottleneck_data;
pub use generator::Generator;
pub use metrics::summarize_dashboard;
pub use snapshot::Snapshot;

// Re-export the data model so consumers need a single dependency.
pub use stockpulse_core::*;
