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

//! CLI command definitions and argument parsing.
//!
//! - [`data`]: one generator per command (inventory, sales, orders, ...)
//! - [`report`]: commands over a whole snapshot (snapshot, summary)

mod data;
mod report;

use crate::error::CliError;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use data::{DataCommands, SeriesArg};
pub use report::ReportCommands;

/// Output encoding for generated records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Seed for the random source (omit for a fresh random seed)
    #[arg(long, global = true, env = "STOCKPULSE_SEED")]
    pub seed: Option<u64>,

    /// Reference instant for generated timestamps, RFC 3339 (defaults to now)
    #[arg(long, global = true, env = "STOCKPULSE_NOW", value_name = "TIMESTAMP")]
    pub now: Option<DateTime<Utc>>,

    /// Generator configuration file (.yaml, .yml or .json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Data (inventory, sales, orders, alerts, predictions, bottlenecks,
/// │         dashboard, performance, timeseries)
/// └── Report (snapshot, summary)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Report(ReportCommands),
}

impl Commands {
    /// Execute the command with the shared options.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration cannot be loaded, a count exceeds
    /// the configured ceiling, or output cannot be rendered or written.
    pub fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            Commands::Data(cmd) => cmd.execute(global),
            Commands::Report(cmd) => cmd.execute(global),
        }
    }
}
