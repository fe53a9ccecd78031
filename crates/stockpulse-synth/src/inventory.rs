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

//! Inventory generation.

use crate::catalog::{product_at, LOCATIONS, SUPPLIERS};
use crate::random::{between, instant_between, uniform};
use crate::Generator;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use stockpulse_core::{round_cents, InventoryItem, Result, StockStatus, StockUnit};
use tracing::debug;

impl Generator {
    /// Generate `count` inventory items.
    ///
    /// Item `i` is `INV-{i+1:04}` / `SKU-{i+1:06}` and takes its name,
    /// category, location and supplier from the fixed catalogue in rotation.
    /// Stock levels are drawn uniformly: current stock 0-500, minimum 10-50,
    /// maximum 100-1000. Roughly `expiry_probability` of the items carry an
    /// expiry date between `expired_lookback_days` ago and one year ahead;
    /// those already past are `Expired`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::CountTooLarge`](stockpulse_core::SynthError) if
    /// `count` exceeds the configured ceiling, or
    /// [`SynthError::DateOutOfRange`](stockpulse_core::SynthError) if the
    /// expiry lookback reaches before the supported calendar.
    pub fn generate_inventory_data(&mut self, count: usize) -> Result<Vec<InventoryItem>> {
        self.check_count(count)?;
        let earliest_expiry = self.days_before(self.config.expired_lookback_days as usize)?;
        let items: Vec<InventoryItem> = (0..count)
            .map(|i| self.inventory_item(i, earliest_expiry))
            .collect();
        debug!(count = items.len(), "generated inventory");
        Ok(items)
    }

    fn inventory_item(&mut self, index: usize, earliest_expiry: DateTime<Utc>) -> InventoryItem {
        let now = self.now;
        let expiry_probability = self.config.expiry_probability;
        let rng = &mut self.rng;

        let current_stock = between(rng, 0, 500);
        let min_stock_level = between(rng, 10, 50);
        let max_stock_level = between(rng, 100, 1000);
        let unit = if rng.gen_bool(0.5) {
            StockUnit::Pcs
        } else {
            StockUnit::Kg
        };
        let unit_cost = round_cents(uniform(rng, 10.0, 210.0));
        let last_restocked = instant_between(rng, now - Duration::days(30), now);
        let expiry_date = rng
            .gen_bool(expiry_probability)
            .then(|| instant_between(rng, earliest_expiry, now + Duration::days(365)));

        let (category, name) = product_at(index);
        let serial = index + 1;

        InventoryItem {
            id: format!("INV-{:04}", serial),
            name: name.to_string(),
            sku: format!("SKU-{:06}", serial),
            category: category.to_string(),
            current_stock,
            min_stock_level,
            max_stock_level,
            unit,
            unit_cost,
            location: LOCATIONS[index % LOCATIONS.len()].to_string(),
            supplier: SUPPLIERS[index % SUPPLIERS.len()].to_string(),
            last_restocked,
            expiry_date,
            status: StockStatus::derive(current_stock, min_stock_level, expiry_date, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockpulse_core::SynthConfig;

    fn generator() -> Generator {
        Generator::seeded(2024).with_now(Utc.with_ymd_and_hms(2025, 5, 20, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generator().generate_inventory_data(0).unwrap().is_empty());
    }

    #[test]
    fn test_identifiers() {
        let items = generator().generate_inventory_data(12).unwrap();
        assert_eq!(items[0].id, "INV-0001");
        assert_eq!(items[0].sku, "SKU-000001");
        assert_eq!(items[11].id, "INV-0012");
        assert_eq!(items[11].sku, "SKU-000012");
    }

    #[test]
    fn test_ranges() {
        let mut gen = generator();
        let now = gen.now();
        for item in gen.generate_inventory_data(500).unwrap() {
            assert!(item.current_stock <= 500);
            assert!((10..=50).contains(&item.min_stock_level));
            assert!((100..=1000).contains(&item.max_stock_level));
            assert!(item.unit_cost >= 10.0 && item.unit_cost <= 210.0);
            assert!(item.last_restocked <= now);
            assert!(item.last_restocked >= now - Duration::days(30));
        }
    }

    #[test]
    fn test_no_expiry_when_disabled() {
        let mut gen = generator()
            .with_config(SynthConfig::new().with_expiry_probability(0.0))
            .unwrap();
        let items = gen.generate_inventory_data(200).unwrap();
        assert!(items.iter().all(|i| i.expiry_date.is_none()));
        assert!(items.iter().all(|i| i.status != StockStatus::Expired));
    }

    #[test]
    fn test_expired_items_occur() {
        let mut gen = generator()
            .with_config(
                SynthConfig::new()
                    .with_expiry_probability(1.0)
                    .with_expired_lookback_days(365),
            )
            .unwrap();
        let items = gen.generate_inventory_data(200).unwrap();
        assert!(items.iter().all(|i| i.expiry_date.is_some()));
        assert!(items.iter().any(|i| i.status == StockStatus::Expired));
    }

    #[test]
    fn test_zero_lookback_never_expires() {
        let mut gen = generator()
            .with_config(
                SynthConfig::new()
                    .with_expiry_probability(1.0)
                    .with_expired_lookback_days(0),
            )
            .unwrap();
        let items = gen.generate_inventory_data(200).unwrap();
        assert!(items.iter().all(|i| i.status != StockStatus::Expired));
    }
}
