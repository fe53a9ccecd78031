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

//! CLI command implementations

mod generate;
mod summary;

pub use generate::{
    alerts, bottlenecks, dashboard, inventory, orders, performance, predictions, sales, snapshot,
    timeseries,
};
pub use summary::{render_summary, summary};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::error::CliError;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use stockpulse_core::SynthConfig;
use stockpulse_synth::Generator;
use tracing::debug;

/// Load a generator configuration, choosing the parser by file extension.
///
/// Unset fields take their defaults; unknown fields are rejected. The
/// configuration is not validated here; [`build_generator`] does that.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, has an extension other than
/// `.yaml`, `.yml` or `.json`, or does not parse.
pub fn load_config(path: &Path) -> Result<SynthConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        "json" => serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        other => Err(CliError::config(format!(
            "{}: unsupported extension '{}', expected .yaml, .yml or .json",
            path.display(),
            other
        ))),
    }
}

/// Build a generator from the global options.
///
/// # Errors
///
/// Returns `Err` if the configuration cannot be loaded or fails validation.
pub fn build_generator(global: &GlobalArgs) -> Result<Generator, CliError> {
    let mut generator = match global.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    if let Some(now) = global.now {
        generator = generator.with_now(now);
    }
    if let Some(path) = &global.config {
        generator = generator.with_config(load_config(path)?)?;
    }
    debug!(seed = ?global.seed, now = %generator.now(), "generator ready");
    Ok(generator)
}

/// Render a value in the requested format, newline-terminated.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::serialize(e.to_string()))?,
        OutputFormat::Json => {
            serde_json::to_string(value).map_err(|e| CliError::serialize(e.to_string()))?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CliError::serialize(e.to_string()))?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Render `value` per the global options and write it out.
fn emit<T: Serialize + ?Sized>(global: &GlobalArgs, value: &T) -> Result<(), CliError> {
    let content = render(value, global.format, global.pretty)?;
    write_output(&content, global.output.as_deref())
}
