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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::NamedTempFile;

const NOW: &str = "2025-03-10T09:00:00Z";

// Test helper to create a StockPulse command with a fixed clock
fn stockpulse_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stockpulse").expect("Failed to find stockpulse binary");
    cmd.env_remove("STOCKPULSE_SEED")
        .env_remove("RUST_LOG")
        .env("STOCKPULSE_NOW", NOW);
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn json_output(args: &[&str]) -> Value {
    let output = stockpulse_cmd().args(args).output().expect("Failed to run stockpulse");
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    stockpulse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("StockPulse - synthetic warehouse data toolkit"))
        .stdout(predicate::str::contains("inventory"))
        .stdout(predicate::str::contains("snapshot"));
}

#[test]
fn test_version_output() {
    stockpulse_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stockpulse"));
}

#[test]
fn test_no_subcommand_fails() {
    stockpulse_cmd().assert().failure();
}

// ===== Data Command Tests =====

#[test]
fn test_inventory_count() {
    let items = json_output(&["--seed", "1", "inventory", "--count", "5"]);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], "INV-0001");
    assert!(items[0]["currentStock"].is_u64());
}

#[test]
fn test_inventory_default_count() {
    let items = json_output(&["--seed", "1", "inventory"]);
    assert_eq!(items.as_array().unwrap().len(), 50);
}

#[test]
fn test_every_data_command_emits_json() {
    for command in [
        "sales",
        "orders",
        "alerts",
        "predictions",
        "bottlenecks",
        "dashboard",
        "performance",
    ] {
        let value = json_output(&["--seed", "2", command]);
        assert!(value.is_array() || value.is_object(), "{}", command);
    }
}

#[test]
fn test_orders_count_and_shape() {
    let orders = json_output(&["--seed", "3", "orders", "-n", "4"]);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 4);
    for order in orders {
        let items = order["items"].as_array().unwrap();
        assert!((1..=5).contains(&items.len()));
    }
}

#[test]
fn test_timeseries() {
    let series = json_output(&["--seed", "4", "timeseries", "--kind", "stock", "--days", "7"]);
    let series = series.as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[6]["date"], "2025-03-10");
    for point in series {
        let value = point["value"].as_u64().unwrap();
        assert!((85..=98).contains(&value));
    }
}

#[test]
fn test_timeseries_requires_kind() {
    stockpulse_cmd().arg("timeseries").assert().failure();
}

#[test]
fn test_snapshot_is_coherent() {
    let snapshot = json_output(&["--seed", "5", "snapshot"]);
    let inventory = snapshot["inventory"].as_array().unwrap();
    assert_eq!(
        snapshot["dashboard"]["totalProducts"].as_u64().unwrap() as usize,
        inventory.len()
    );
    assert_eq!(snapshot["generatedAt"], "2025-03-10T09:00:00Z");
}

// ===== Reproducibility Tests =====

#[test]
fn test_seed_reproducible() {
    let a = json_output(&["--seed", "42", "orders", "--count", "10"]);
    let b = json_output(&["--seed", "42", "orders", "--count", "10"]);
    assert_eq!(a, b);
}

#[test]
fn test_seed_from_environment() {
    let run = || {
        stockpulse_cmd()
            .env("STOCKPULSE_SEED", "9")
            .args(["inventory", "--count", "3"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_different_seeds_differ() {
    let a = json_output(&["--seed", "1", "inventory", "--count", "10"]);
    let b = json_output(&["--seed", "2", "inventory", "--count", "10"]);
    assert_ne!(a, b);
}

// ===== Output Option Tests =====

#[test]
fn test_yaml_format() {
    stockpulse_cmd()
        .args(["--seed", "1", "--format", "yaml", "inventory", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("- id: INV-0001"));
}

#[test]
fn test_pretty_json() {
    stockpulse_cmd()
        .args(["--seed", "1", "--pretty", "bottlenecks"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {"));
}

#[test]
fn test_output_file() {
    let out = NamedTempFile::new().unwrap();
    stockpulse_cmd()
        .args(["--seed", "1", "performance", "--output"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value = serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
    assert!(written["stockAccuracy"].is_f64());
}

#[test]
fn test_summary() {
    stockpulse_cmd()
        .args(["--seed", "6", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("StockPulse Summary"))
        .stdout(predicate::str::contains("Inventory"))
        .stdout(predicate::str::contains("Predictions"));
}

// ===== Configuration Tests =====

#[test]
fn test_yaml_config_sets_defaults() {
    let config = create_temp_file("defaultInventoryCount: 7\n", ".yaml");
    let path = config.path().to_str().unwrap();
    let items = json_output(&["--seed", "1", "--config", path, "inventory"]);
    assert_eq!(items.as_array().unwrap().len(), 7);
}

#[test]
fn test_json_config_limits_counts() {
    let config = create_temp_file(
        r#"{"maxCount": 100, "defaultInventoryCount": 5, "defaultOrderCount": 5, "defaultSalesDays": 2}"#,
        ".json",
    );
    stockpulse_cmd()
        .args(["--config", config.path().to_str().unwrap(), "orders", "--count", "101"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("exceeds maximum"));
}

#[test]
fn test_invalid_config_value() {
    let config = create_temp_file("expiryProbability: 1.5\n", ".yaml");
    stockpulse_cmd()
        .args(["--config", config.path().to_str().unwrap(), "inventory"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expiryProbability"));
}

#[test]
fn test_unknown_config_field() {
    let config = create_temp_file("inventoryCount: 3\n", ".yml");
    stockpulse_cmd()
        .args(["--config", config.path().to_str().unwrap(), "inventory"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file() {
    stockpulse_cmd()
        .args(["--config", "/nonexistent/stockpulse.yaml", "inventory"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_sales_days_limited_by_record_ceiling() {
    stockpulse_cmd()
        .args(["sales", "--days", "20001"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds maximum allowed limit of 1000000"));
}

#[test]
fn test_count_above_default_ceiling() {
    stockpulse_cmd()
        .args(["inventory", "--count", "1000001"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds maximum allowed limit of 1000000"));
}
