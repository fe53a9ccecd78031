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

//! Warehouse-level records: bottlenecks, KPIs, dashboard aggregates and
//! chart series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Warehouse process affected by a bottleneck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckType {
    Picking,
    Packing,
    Shipping,
    Receiving,
    Storage,
}

/// Bottleneck severity. Bottlenecks have no critical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckSeverity {
    Low,
    Medium,
    High,
}

/// Throughput figures for a bottleneck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputMetrics {
    pub current_throughput: u32,
    pub target_throughput: u32,
    /// Percent of target reached.
    pub efficiency: u32,
}

/// A named operational bottleneck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckData {
    pub area: String,
    #[serde(rename = "type")]
    pub bottleneck_type: BottleneckType,
    pub severity: BottleneckSeverity,
    pub description: String,
    pub impact: String,
    pub suggestion: String,
    pub metrics: ThroughputMetrics,
}

/// Headline aggregates for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_products: usize,
    /// Sum of `current_stock * unit_cost` over the inventory.
    pub total_value: f64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub today_sales: f64,
    pub yesterday_sales: f64,
    pub monthly_revenue: f64,
    /// Estimated as twelve times the monthly revenue.
    pub yearly_revenue: f64,
    pub pending_orders: usize,
    pub shipped_orders: usize,
    pub active_alerts: usize,
    pub critical_alerts: usize,
}

/// Operational KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Hours from order to dispatch.
    pub order_fulfillment_time: f64,
    /// Inventory turns per year.
    pub inventory_turnover: f64,
    /// Percent.
    pub stock_accuracy: f64,
    /// Percent.
    pub on_time_delivery_rate: f64,
    /// Percent.
    pub warehouse_utilization: f64,
    /// Percent.
    pub picking_efficiency: f64,
}

/// Quantity plotted by a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Daily revenue.
    Sales,
    /// Daily order count.
    Orders,
    /// Daily stock availability, percent.
    Stock,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [Self::Sales, Self::Orders, Self::Stock];

    /// Inclusive range of values drawn for this kind.
    pub fn value_range(&self) -> (u32, u32) {
        match self {
            Self::Sales => (1000, 5000),
            Self::Orders => (20, 80),
            Self::Stock => (85, 98),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sales => "sales",
            Self::Orders => "orders",
            Self::Stock => "stock",
        })
    }
}

/// One daily point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
