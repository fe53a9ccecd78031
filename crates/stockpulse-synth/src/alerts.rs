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

//! Alert derivation from inventory and orders.

use crate::random::instant_between;
use crate::Generator;
use chrono::Duration;
use rand::Rng;
use stockpulse_core::{
    Alert, AlertType, InventoryItem, Order, Result, Severity, StockStatus,
};
use tracing::debug;

/// Per-type alert rule: which items qualify and how the alert looks.
struct StockRule {
    status: StockStatus,
    alert_type: AlertType,
    id_prefix: &'static str,
    severity: Severity,
    title: &'static str,
    /// Alerts are stamped within this many hours before `now`.
    window_hours: i64,
    read_probability: f64,
}

const STOCK_RULES: [StockRule; 3] = [
    StockRule {
        status: StockStatus::LowStock,
        alert_type: AlertType::LowStock,
        id_prefix: "ALERT-LOW",
        severity: Severity::Medium,
        title: "Low Stock Alert",
        window_hours: 24,
        read_probability: 0.7,
    },
    StockRule {
        status: StockStatus::OutOfStock,
        alert_type: AlertType::OutOfStock,
        id_prefix: "ALERT-OUT",
        severity: Severity::High,
        title: "Out of Stock",
        window_hours: 12,
        read_probability: 0.5,
    },
    StockRule {
        status: StockStatus::Expired,
        alert_type: AlertType::Expired,
        id_prefix: "ALERT-EXP",
        severity: Severity::Critical,
        title: "Expired Product",
        window_hours: 6,
        read_probability: 0.0,
    },
];

const DELAY_WINDOW_HOURS: i64 = 4;
const DELAY_READ_PROBABILITY: f64 = 0.6;

fn stock_message(rule: &StockRule, item: &InventoryItem) -> String {
    match rule.alert_type {
        AlertType::LowStock => format!(
            "{} ({}) is running low. Current stock: {} {}",
            item.name, item.sku, item.current_stock, item.unit
        ),
        AlertType::OutOfStock => {
            format!("{} ({}) is completely out of stock", item.name, item.sku)
        }
        _ => format!(
            "{} ({}) has expired and should be removed from inventory",
            item.name, item.sku
        ),
    }
}

impl Generator {
    /// Scan a fresh inventory set and a fresh order set for alert
    /// conditions.
    ///
    /// Low-stock, out-of-stock and expired items raise medium, high and
    /// critical alerts respectively; shipped orders past their estimated
    /// delivery raise medium delivery-delay alerts, at most
    /// `max_delay_alerts` of them. The result is sorted most recent first.
    ///
    /// The inventory and orders scanned here are generated for this call
    /// only. Use [`Generator::derive_alerts`] to scan collections you hold.
    pub fn generate_alerts(&mut self) -> Result<Vec<Alert>> {
        let inventory = self.backing_inventory()?;
        let orders = self.generate_order_data(self.config.default_order_count)?;
        Ok(self.derive_alerts(&inventory, &orders))
    }

    /// Raise alerts for exactly the given inventory and orders.
    ///
    /// Same rules and ordering as [`Generator::generate_alerts`].
    pub fn derive_alerts(&mut self, inventory: &[InventoryItem], orders: &[Order]) -> Vec<Alert> {
        let now = self.now;
        let max_delays = self.config.max_delay_alerts;
        let rng = &mut self.rng;
        let mut alerts = Vec::new();

        for rule in &STOCK_RULES {
            let matching = inventory.iter().filter(|item| item.status == rule.status);
            for (n, item) in matching.enumerate() {
                alerts.push(Alert {
                    id: format!("{}-{}", rule.id_prefix, n + 1),
                    alert_type: rule.alert_type,
                    severity: rule.severity,
                    title: rule.title.to_string(),
                    message: stock_message(rule, item),
                    product_id: Some(item.id.clone()),
                    order_id: None,
                    timestamp: instant_between(rng, now - Duration::hours(rule.window_hours), now),
                    is_read: rng.gen_bool(rule.read_probability),
                    is_resolved: false,
                });
            }
        }

        let delayed = orders.iter().filter(|order| order.is_delayed(now)).take(max_delays);
        for (n, order) in delayed.enumerate() {
            let expected = order
                .estimated_delivery
                .map(|eta| eta.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            alerts.push(Alert {
                id: format!("ALERT-DEL-{}", n + 1),
                alert_type: AlertType::DeliveryDelay,
                severity: Severity::Medium,
                title: "Delivery Delay".to_string(),
                message: format!("Order {} is delayed. Expected delivery was {}", order.id, expected),
                product_id: None,
                order_id: Some(order.id.clone()),
                timestamp: instant_between(rng, now - Duration::hours(DELAY_WINDOW_HOURS), now),
                is_read: rng.gen_bool(DELAY_READ_PROBABILITY),
                is_resolved: false,
            });
        }

        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(count = alerts.len(), "derived alerts");
        alerts
    }
}
