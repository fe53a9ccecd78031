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

//! Single-generator commands and the snapshot command.

use super::{build_generator, emit};
use crate::cli::GlobalArgs;
use crate::error::CliError;
use stockpulse_core::SeriesKind;
use stockpulse_synth::{generate_bottleneck_data, Snapshot};
use tracing::info;

pub fn inventory(global: &GlobalArgs, count: Option<usize>) -> Result<(), CliError> {
    let mut gen = build_generator(global)?;
    let count = count.unwrap_or(gen.config().default_inventory_count);
    let items = gen.generate_inventory_data(count)?;
    info!(count = items.len(), "inventory");
    emit(global, &items)
}

pub fn sales(global: &GlobalArgs, days: Option<usize>) -> Result<(), CliError> {
    let mut gen = build_generator(global)?;
    let days = days.unwrap_or(gen.config().default_sales_days);
    let sales = gen.generate_sales_data(days)?;
    info!(days, count = sales.len(), "sales");
    emit(global, &sales)
}

pub fn orders(global: &GlobalArgs, count: Option<usize>) -> Result<(), CliError> {
    let mut gen = build_generator(global)?;
    let count = count.unwrap_or(gen.config().default_order_count);
    let orders = gen.generate_order_data(count)?;
    info!(count = orders.len(), "orders");
    emit(global, &orders)
}

pub fn alerts(global: &GlobalArgs) -> Result<(), CliError> {
    let alerts = build_generator(global)?.generate_alerts()?;
    info!(count = alerts.len(), "alerts");
    emit(global, &alerts)
}

pub fn predictions(global: &GlobalArgs) -> Result<(), CliError> {
    let predictions = build_generator(global)?.generate_prediction_data()?;
    info!(count = predictions.len(), "predictions");
    emit(global, &predictions)
}

pub fn bottlenecks(global: &GlobalArgs) -> Result<(), CliError> {
    emit(global, &generate_bottleneck_data())
}

pub fn dashboard(global: &GlobalArgs) -> Result<(), CliError> {
    let metrics = build_generator(global)?.generate_dashboard_metrics()?;
    emit(global, &metrics)
}

pub fn performance(global: &GlobalArgs) -> Result<(), CliError> {
    let metrics = build_generator(global)?.generate_performance_metrics();
    emit(global, &metrics)
}

pub fn timeseries(
    global: &GlobalArgs,
    kind: SeriesKind,
    days: Option<usize>,
) -> Result<(), CliError> {
    let mut gen = build_generator(global)?;
    let days = days.unwrap_or(gen.config().default_sales_days);
    let series = gen.generate_time_series_data(days, kind)?;
    info!(%kind, days, "time series");
    emit(global, &series)
}

pub fn snapshot(global: &GlobalArgs) -> Result<(), CliError> {
    let snapshot = Snapshot::generate(&mut build_generator(global)?)?;
    emit(global, &snapshot)
}
