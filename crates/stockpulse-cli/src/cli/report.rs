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

//! Commands over a whole snapshot.

use super::GlobalArgs;
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Generate one coherent dataset
    ///
    /// Every collection and aggregate in the snapshot refers to the same
    /// products and orders.
    Snapshot,

    /// Print a human-readable digest of a snapshot
    ///
    /// Ignores --format; the digest is plain text, colored on terminals.
    Summary,
}

impl ReportCommands {
    pub fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            ReportCommands::Snapshot => commands::snapshot(global),
            ReportCommands::Summary => commands::summary(global),
        }
    }
}
