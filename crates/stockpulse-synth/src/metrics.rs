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

//! Dashboard aggregates and operational KPIs.

use crate::random::uniform;
use crate::Generator;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use stockpulse_core::{
    round_to, Alert, DashboardMetrics, InventoryItem, Order, OrderStatus, PerformanceMetrics,
    Result, SalesTransaction, Severity, StockStatus,
};
use tracing::debug;

/// Reduce held collections into dashboard aggregates.
///
/// Sales dates are compared on their UTC calendar date: `today_sales` sums
/// transactions dated on `now`'s date, `yesterday_sales` those one day
/// earlier, and `monthly_revenue` those in `now`'s calendar month.
/// `yearly_revenue` is extrapolated as twelve months of the current one.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use stockpulse_synth::{summarize_dashboard, Generator};
///
/// let mut gen = Generator::seeded(3);
/// let inventory = gen.generate_inventory_data(20).unwrap();
/// let metrics = summarize_dashboard(Utc::now(), &inventory, &[], &[], &[]);
///
/// assert_eq!(metrics.total_products, 20);
/// assert_eq!(metrics.today_sales, 0.0);
/// ```
pub fn summarize_dashboard(
    now: DateTime<Utc>,
    inventory: &[InventoryItem],
    sales: &[SalesTransaction],
    orders: &[Order],
    alerts: &[Alert],
) -> DashboardMetrics {
    let today = now.date_naive();
    let yesterday = (now - Duration::days(1)).date_naive();

    let sales_on = |day: NaiveDate| -> f64 {
        sales
            .iter()
            .filter(|s| s.date.date_naive() == day)
            .map(|s| s.amount)
            .sum()
    };
    let monthly_revenue: f64 = sales
        .iter()
        .filter(|s| s.date.year() == now.year() && s.date.month() == now.month())
        .map(|s| s.amount)
        .sum();

    let stock_count = |status: StockStatus| inventory.iter().filter(|i| i.status == status).count();
    let order_count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

    DashboardMetrics {
        total_products: inventory.len(),
        total_value: inventory.iter().map(InventoryItem::stock_value).sum(),
        low_stock_items: stock_count(StockStatus::LowStock),
        out_of_stock_items: stock_count(StockStatus::OutOfStock),
        today_sales: sales_on(today),
        yesterday_sales: sales_on(yesterday),
        monthly_revenue,
        yearly_revenue: monthly_revenue * 12.0,
        pending_orders: order_count(OrderStatus::Pending),
        shipped_orders: order_count(OrderStatus::Shipped),
        active_alerts: alerts.iter().filter(|a| a.is_active()).count(),
        critical_alerts: alerts
            .iter()
            .filter(|a| a.is_active() && a.severity == Severity::Critical)
            .count(),
    }
}

impl Generator {
    /// Aggregate freshly generated inventory, sales, orders and alerts.
    ///
    /// Each of the four collections is generated independently for this
    /// call, so the figures describe four unrelated datasets. The returned
    /// metrics cannot be traced back to records from any other call; use
    /// [`summarize_dashboard`] over held collections when that matters.
    pub fn generate_dashboard_metrics(&mut self) -> Result<DashboardMetrics> {
        let inventory = self.backing_inventory()?;
        let sales = self.generate_sales_data(self.config.default_sales_days)?;
        let orders = self.generate_order_data(self.config.default_order_count)?;
        let alerts = self.generate_alerts()?;

        let metrics = summarize_dashboard(self.now, &inventory, &sales, &orders, &alerts);
        debug!(
            products = metrics.total_products,
            active_alerts = metrics.active_alerts,
            "generated dashboard metrics"
        );
        Ok(metrics)
    }

    /// Draw the six operational KPIs, each to one decimal:
    /// fulfillment 1-3 h, turnover 8-12 per year, stock accuracy 95-100 %,
    /// on-time delivery 90-100 %, utilization 75-90 %, picking 80-100 %.
    pub fn generate_performance_metrics(&mut self) -> PerformanceMetrics {
        let rng = &mut self.rng;
        let mut kpi = |min: f64, max: f64| round_to(uniform(rng, min, max), 1);

        PerformanceMetrics {
            order_fulfillment_time: kpi(1.0, 3.0),
            inventory_turnover: kpi(8.0, 12.0),
            stock_accuracy: kpi(95.0, 100.0),
            on_time_delivery_rate: kpi(90.0, 100.0),
            warehouse_utilization: kpi(75.0, 90.0),
            picking_efficiency: kpi(80.0, 100.0),
        }
    }
}
