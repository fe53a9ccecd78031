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

//! Stock status counts and category distribution.

use serde::Serialize;
use stockpulse_core::{InventoryItem, StockStatus};

/// Items per stock status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatusCounts {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub expired: usize,
}

impl StockStatusCounts {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.status {
                StockStatus::InStock => counts.in_stock += 1,
                StockStatus::LowStock => counts.low_stock += 1,
                StockStatus::OutOfStock => counts.out_of_stock += 1,
                StockStatus::Expired => counts.expired += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::InStock => self.in_stock,
            StockStatus::LowStock => self.low_stock,
            StockStatus::OutOfStock => self.out_of_stock,
            StockStatus::Expired => self.expired,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Item count per category, in order of each category's first appearance.
pub fn category_distribution(items: &[InventoryItem]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|c| c.category == item.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: item.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_synth::Generator;

    #[test]
    fn test_counts_cover_every_item() {
        let items = Generator::seeded(4).generate_inventory_data(80).unwrap();
        let counts = StockStatusCounts::from_items(&items);

        let total: usize = StockStatus::ALL.iter().map(|&s| counts.get(s)).sum();
        assert_eq!(total, items.len());
        assert_eq!(
            counts.low_stock,
            items.iter().filter(|i| i.status == StockStatus::LowStock).count()
        );
    }

    #[test]
    fn test_category_order_and_totals() {
        let items = Generator::seeded(5).generate_inventory_data(50).unwrap();
        let dist = category_distribution(&items);

        assert_eq!(dist[0].category, items[0].category);
        assert_eq!(dist.iter().map(|c| c.count).sum::<usize>(), 50);

        let mut seen = std::collections::HashSet::new();
        assert!(dist.iter().all(|c| seen.insert(c.category.clone())));
    }

    #[test]
    fn test_empty() {
        assert!(category_distribution(&[]).is_empty());
        assert_eq!(StockStatusCounts::from_items(&[]), StockStatusCounts::default());
    }
}
