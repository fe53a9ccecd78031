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

//! Demand prediction generation.

use crate::random::{between, pick, uniform};
use crate::Generator;
use stockpulse_core::{
    replenishment, round_to, InventoryItem, PredictionData, Result, Seasonality, Trend,
};
use tracing::debug;

impl Generator {
    /// Predict 30-day demand for every item of a fresh inventory set.
    ///
    /// Sorted by `days_until_stock_out` ascending, most urgent first.
    pub fn generate_prediction_data(&mut self) -> Result<Vec<PredictionData>> {
        let inventory = self.backing_inventory()?;
        Ok(self.derive_predictions(&inventory))
    }

    /// Predict demand for exactly the given items.
    ///
    /// Trend and seasonality are drawn uniformly, demand from 50-300 units
    /// and confidence from 0.60-1.00. Recommended order and days until
    /// stockout follow [`replenishment`]. The sort is stable, so items with
    /// equal urgency keep their inventory order.
    pub fn derive_predictions(&mut self, inventory: &[InventoryItem]) -> Vec<PredictionData> {
        let rng = &mut self.rng;

        let mut predictions: Vec<PredictionData> = inventory
            .iter()
            .map(|item| {
                let trend = *pick(rng, &Trend::ALL);
                let seasonality = *pick(rng, &Seasonality::ALL);
                let predicted_demand = between(rng, 50, 300);
                let confidence = round_to(uniform(rng, 0.6, 1.0), 2);
                let plan = replenishment(item.current_stock, predicted_demand, item.min_stock_level);

                PredictionData {
                    product_id: item.id.clone(),
                    product_name: item.name.clone(),
                    current_stock: item.current_stock,
                    predicted_demand,
                    recommended_order: plan.recommended_order,
                    confidence,
                    days_until_stock_out: plan.days_until_stock_out,
                    trend,
                    seasonality,
                }
            })
            .collect();

        predictions.sort_by_key(|p| p.days_until_stock_out);
        debug!(count = predictions.len(), "derived predictions");
        predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_core::NO_FORESEEABLE_STOCKOUT;

    #[test]
    fn test_sorted_by_urgency() {
        let predictions = Generator::seeded(41).generate_prediction_data().unwrap();
        assert_eq!(predictions.len(), 50);
        for pair in predictions.windows(2) {
            assert!(pair[0].days_until_stock_out <= pair[1].days_until_stock_out);
        }
    }

    #[test]
    fn test_matches_inventory() {
        let mut gen = Generator::seeded(42);
        let inventory = gen.generate_inventory_data(80).unwrap();
        let predictions = gen.derive_predictions(&inventory);
        assert_eq!(predictions.len(), inventory.len());

        for p in &predictions {
            let item = inventory.iter().find(|i| i.id == p.product_id).unwrap();
            assert_eq!(p.current_stock, item.current_stock);
            assert!((50..=300).contains(&p.predicted_demand));
            assert!(p.confidence >= 0.6 && p.confidence <= 1.0);
            if p.current_stock >= p.predicted_demand {
                assert_eq!(p.recommended_order, 0);
                assert_eq!(p.days_until_stock_out, NO_FORESEEABLE_STOCKOUT);
            } else {
                assert_eq!(
                    p.recommended_order,
                    p.predicted_demand - p.current_stock + item.min_stock_level
                );
                assert!(p.has_foreseeable_stockout());
            }
        }
    }
}
