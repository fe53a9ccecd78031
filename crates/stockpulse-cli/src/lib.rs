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

//! StockPulse CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Data
//!
//! - **inventory**: inventory items (`--count`)
//! - **sales**: sales transactions (`--days`)
//! - **orders**: customer orders (`--count`)
//! - **alerts**: stock and delivery-delay alerts
//! - **predictions**: demand predictions, most urgent first
//! - **bottlenecks**: the fixed bottleneck records
//! - **dashboard**: headline dashboard aggregates
//! - **performance**: operational KPIs
//! - **timeseries**: a daily chart series (`--kind`, `--days`)
//!
//! ## Reports
//!
//! - **snapshot**: one coherent dataset with every view derived from it
//! - **summary**: colored, human-readable digest of a snapshot
//!
//! # Global options
//!
//! `--seed` (or `STOCKPULSE_SEED`) and `--now` (or `STOCKPULSE_NOW`) make
//! output reproducible. `--config` loads a YAML or JSON generator
//! configuration. `--format`, `--pretty` and `--output` control rendering.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
