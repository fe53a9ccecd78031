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

//! Commands that run a single generator.

use super::GlobalArgs;
use crate::commands;
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use stockpulse_core::SeriesKind;

/// Chart series selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesArg {
    Sales,
    Orders,
    Stock,
}

impl From<SeriesArg> for SeriesKind {
    fn from(arg: SeriesArg) -> Self {
        match arg {
            SeriesArg::Sales => SeriesKind::Sales,
            SeriesArg::Orders => SeriesKind::Orders,
            SeriesArg::Stock => SeriesKind::Stock,
        }
    }
}

/// Single-generator commands.
///
/// Counts left unset fall back to the configured defaults. Commands whose
/// records refer to products or orders generate their own backing data, so
/// the output of two commands never shares identifiers beyond the id
/// pattern; use `snapshot` for one coherent dataset.
#[derive(Subcommand)]
pub enum DataCommands {
    /// Generate inventory items
    Inventory {
        /// Number of items
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Generate sales transactions
    ///
    /// Produces 10-50 transactions per day for the given number of days,
    /// most recent day first.
    Sales {
        /// Number of days, ending today
        #[arg(short, long)]
        days: Option<usize>,
    },

    /// Generate customer orders
    Orders {
        /// Number of orders
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Generate stock and delivery-delay alerts
    Alerts,

    /// Generate demand predictions, most urgent first
    Predictions,

    /// Print the warehouse bottleneck records
    Bottlenecks,

    /// Generate headline dashboard metrics
    Dashboard,

    /// Generate operational KPIs
    Performance,

    /// Generate a daily chart series
    Timeseries {
        /// Series to generate
        #[arg(short, long, value_enum)]
        kind: SeriesArg,

        /// Number of days, ending today
        #[arg(short, long)]
        days: Option<usize>,
    },
}

impl DataCommands {
    pub fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            DataCommands::Inventory { count } => commands::inventory(global, count),
            DataCommands::Sales { days } => commands::sales(global, days),
            DataCommands::Orders { count } => commands::orders(global, count),
            DataCommands::Alerts => commands::alerts(global),
            DataCommands::Predictions => commands::predictions(global),
            DataCommands::Bottlenecks => commands::bottlenecks(global),
            DataCommands::Dashboard => commands::dashboard(global),
            DataCommands::Performance => commands::performance(global),
            DataCommands::Timeseries { kind, days } => {
                commands::timeseries(global, kind.into(), days)
            }
        }
    }
}
