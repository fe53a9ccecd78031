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

//! StockPulse Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use stockpulse_cli::cli::{Commands, GlobalArgs};
use tracing_subscriber::EnvFilter;

/// StockPulse - synthetic warehouse data toolkit
///
/// Generates plausible inventory, sales, order, alert and forecast data for
/// demos, dashboards and tests, and prints it as JSON or YAML.
///
/// # Examples
///
/// ```bash
/// # Fifty inventory items as pretty JSON
/// stockpulse inventory --pretty
///
/// # Reproducible orders as YAML
/// stockpulse --seed 42 --now 2025-01-01T00:00:00Z --format yaml orders --count 10
///
/// # One coherent dataset, written to a file
/// stockpulse snapshot --output snapshot.json
///
/// # Human-readable digest
/// stockpulse summary
/// ```
#[derive(Parser)]
#[command(name = "stockpulse")]
#[command(author, version, about = "StockPulse - synthetic warehouse data toolkit", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command.execute(&cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins unless
/// `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stockpulse=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockpulse=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
