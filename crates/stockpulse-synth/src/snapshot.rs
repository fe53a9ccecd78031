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

//! A single coherent dataset with every view derived from it.

use crate::{generate_bottleneck_data, summarize_dashboard, Generator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockpulse_core::{
    Alert, BottleneckData, DashboardMetrics, InventoryItem, Order, PerformanceMetrics,
    PredictionData, Result, SalesTransaction, SeriesKind, TimeSeriesPoint,
};
use tracing::info_span;

/// Every collection and aggregate of one generated dataset.
///
/// Unlike the top-level generators, all records here refer to each other:
/// sales, orders and predictions reference products of `inventory`, alerts
/// reference `inventory` and `orders`, and `dashboard` summarizes exactly
/// these collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<SalesTransaction>,
    pub orders: Vec<Order>,
    pub alerts: Vec<Alert>,
    pub predictions: Vec<PredictionData>,
    pub bottlenecks: Vec<BottleneckData>,
    pub dashboard: DashboardMetrics,
    pub performance: PerformanceMetrics,
    pub sales_series: Vec<TimeSeriesPoint>,
    pub order_series: Vec<TimeSeriesPoint>,
    pub stock_series: Vec<TimeSeriesPoint>,
}

impl Snapshot {
    /// Generate a snapshot sized by the generator's configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockpulse_synth::{Generator, Snapshot};
    ///
    /// let mut gen = Generator::seeded(7);
    /// let snapshot = Snapshot::generate(&mut gen).unwrap();
    ///
    /// let ids: Vec<_> = snapshot.inventory.iter().map(|i| &i.id).collect();
    /// assert!(snapshot.sales.iter().all(|s| ids.contains(&&s.product_id)));
    /// ```
    pub fn generate(gen: &mut Generator) -> Result<Self> {
        let config = gen.config().clone();
        let _span = info_span!("snapshot", now = %gen.now()).entered();

        let now = gen.now();
        let days = config.default_sales_days;
        let inventory = gen.generate_inventory_data(config.default_inventory_count)?;
        let sales = gen.derive_sales(&inventory, days)?;
        let orders = gen.derive_orders(&inventory, config.default_order_count)?;
        let alerts = gen.derive_alerts(&inventory, &orders);
        let predictions = gen.derive_predictions(&inventory);
        let dashboard = summarize_dashboard(now, &inventory, &sales, &orders, &alerts);
        let performance = gen.generate_performance_metrics();

        Ok(Self {
            generated_at: now,
            sales_series: gen.generate_time_series_data(days, SeriesKind::Sales)?,
            order_series: gen.generate_time_series_data(days, SeriesKind::Orders)?,
            stock_series: gen.generate_time_series_data(days, SeriesKind::Stock)?,
            inventory,
            sales,
            orders,
            alerts,
            predictions,
            bottlenecks: generate_bottleneck_data(),
            dashboard,
            performance,
        })
    }
}
