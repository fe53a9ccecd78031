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

//! Sales transaction generation.

use crate::catalog::REGIONS;
use crate::random::{between, pick, uniform};
use crate::Generator;
use rand::Rng;
use stockpulse_core::{
    max_sales_records, round_cents, CustomerType, InventoryItem, Result, SalesChannel,
    SalesTransaction, MAX_SALES_PER_DAY, MIN_SALES_PER_DAY,
};
use tracing::debug;

impl Generator {
    /// Generate sales for the `days` days ending today.
    ///
    /// Each day carries 10-50 transactions against products of a freshly
    /// generated inventory set. Day 0 is dated `now`, day `d` is `d` days
    /// earlier; transactions are ordered day by day, most recent day first.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::CountTooLarge`](stockpulse_core::SynthError) if
    /// the most transactions `days` days can produce exceed the configured
    /// ceiling.
    pub fn generate_sales_data(&mut self, days: usize) -> Result<Vec<SalesTransaction>> {
        self.check_count(max_sales_records(days))?;
        let inventory = self.backing_inventory()?;
        self.derive_sales(&inventory, days)
    }

    /// Generate sales for `days` days against the given inventory.
    ///
    /// Returns no transactions when `inventory` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::CountTooLarge`](stockpulse_core::SynthError) as
    /// [`Generator::generate_sales_data`] does, and
    /// [`SynthError::DateOutOfRange`](stockpulse_core::SynthError) if the
    /// oldest day precedes the supported calendar.
    pub fn derive_sales(
        &mut self,
        inventory: &[InventoryItem],
        days: usize,
    ) -> Result<Vec<SalesTransaction>> {
        let bound = max_sales_records(days);
        self.check_count(bound)?;
        if inventory.is_empty() || days == 0 {
            return Ok(Vec::new());
        }
        self.days_before(days - 1)?;

        let mut sales = Vec::with_capacity(bound);

        for day in 0..days {
            let date = self.days_before(day)?;
            let rng = &mut self.rng;
            let stamp = date.format("%Y%m%d");
            let per_day = between(rng, MIN_SALES_PER_DAY, MAX_SALES_PER_DAY);

            for seq in 1..=per_day {
                let product = pick(rng, inventory);
                let quantity = between(rng, 1, 10);
                let markup = uniform(rng, 1.0, 1.5);
                let channel = *pick(rng, &SalesChannel::ALL);
                let customer_type = if rng.gen_bool(0.7) {
                    CustomerType::Returning
                } else {
                    CustomerType::New
                };

                sales.push(SalesTransaction {
                    id: format!("SALE-{}-{:04}", stamp, seq),
                    date,
                    amount: round_cents(product.unit_cost * f64::from(quantity) * markup),
                    quantity,
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    channel,
                    customer_type,
                    region: pick(rng, &REGIONS).to_string(),
                });
            }
        }

        debug!(days, count = sales.len(), "generated sales");
        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::collections::{HashMap, HashSet};
    use stockpulse_core::{SynthConfig, SynthError};

    #[test]
    fn test_transactions_per_day() {
        let mut gen = Generator::seeded(11);
        let sales = gen.generate_sales_data(14).unwrap();

        let mut per_day: HashMap<_, usize> = HashMap::new();
        for sale in &sales {
            *per_day.entry(sale.date.date_naive()).or_default() += 1;
        }
        assert_eq!(per_day.len(), 14);
        assert!(per_day.values().all(|n| (10..=50).contains(n)));
    }

    #[test]
    fn test_amount_reflects_markup() {
        let mut gen = Generator::seeded(12);
        let inventory = gen.generate_inventory_data(20).unwrap();
        let costs: HashMap<_, _> = inventory.iter().map(|i| (i.id.clone(), i.unit_cost)).collect();

        for sale in gen.derive_sales(&inventory, 5).unwrap() {
            let base = costs[&sale.product_id] * f64::from(sale.quantity);
            assert!((1..=10).contains(&sale.quantity));
            assert!(sale.amount >= round_cents(base) - 0.01);
            assert!(sale.amount <= round_cents(base * 1.5) + 0.01);
        }
    }

    #[test]
    fn test_ids_unique() {
        let sales = Generator::seeded(13).generate_sales_data(30).unwrap();
        let ids: HashSet<_> = sales.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), sales.len());
    }

    #[test]
    fn test_record_count_within_ceiling() {
        let config = SynthConfig::new()
            .with_max_count(100)
            .with_inventory_count(10)
            .with_order_count(10)
            .with_sales_days(2);
        let mut gen = Generator::seeded(15).with_config(config).unwrap();

        let sales = gen.generate_sales_data(2).unwrap();
        assert!(sales.len() <= 100);
        assert_eq!(
            gen.generate_sales_data(20).unwrap_err(),
            SynthError::CountTooLarge {
                requested: 1000,
                max: 100
            }
        );
    }

    #[test]
    fn test_oldest_day_out_of_range() {
        let inventory = Generator::seeded(16).generate_inventory_data(5).unwrap();
        let mut gen = Generator::seeded(16).with_now(DateTime::<Utc>::MIN_UTC);

        assert_eq!(
            gen.derive_sales(&inventory, 2),
            Err(SynthError::DateOutOfRange { days: 1 })
        );
        assert!(gen.derive_sales(&inventory, 1).is_ok());
    }

    #[test]
    fn test_empty_inventory_or_days() {
        let mut gen = Generator::seeded(14);
        assert!(gen.derive_sales(&[], 10).unwrap().is_empty());
        assert!(gen.generate_sales_data(0).unwrap().is_empty());
    }
}
