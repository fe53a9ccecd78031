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

//! Urgency and confidence bands, filtering, sorting and summary figures
//! for demand predictions.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use stockpulse_core::{PredictionData, Trend};

/// Value assumed per recommended unit when pricing a reorder.
pub const RECOMMENDED_UNIT_VALUE: f64 = 50.0;

/// Predictions at or below this many days count as urgent.
pub const URGENT_WITHIN_DAYS: u32 = 30;

/// How soon a product runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    /// Most urgent first.
    pub const ALL: [UrgencyLevel; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// 7 days or fewer is critical, 14 high, 30 medium, anything later low.
    pub fn from_days(days_until_stock_out: u32) -> Self {
        match days_until_stock_out {
            0..=7 => Self::Critical,
            8..=14 => Self::High,
            15..=30 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence band of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Prediction filter. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionFilter {
    /// Case-insensitive substring of the product name or id.
    pub search: Option<String>,
    pub trend: Option<Trend>,
    pub urgency: Option<UrgencyLevel>,
    pub confidence: Option<ConfidenceLevel>,
}

impl PredictionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn matches(&self, prediction: &PredictionData) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            prediction.product_name.to_lowercase().contains(&term)
                || prediction.product_id.to_lowercase().contains(&term)
        });

        search_ok
            && self.trend.map_or(true, |t| prediction.trend == t)
            && self
                .urgency
                .map_or(true, |u| UrgencyLevel::from_days(prediction.days_until_stock_out) == u)
            && self
                .confidence
                .map_or(true, |c| ConfidenceLevel::from_confidence(prediction.confidence) == c)
    }

    pub fn apply<'a>(&self, predictions: &'a [PredictionData]) -> Vec<&'a PredictionData> {
        predictions.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Sort order for predictions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PredictionSortKey {
    /// Soonest stockout first.
    #[default]
    DaysUntilStockOut,
    /// Highest first.
    Confidence,
    /// Largest first.
    RecommendedOrder,
    /// Largest first.
    PredictedDemand,
}

impl PredictionSortKey {
    fn compare(self, a: &PredictionData, b: &PredictionData) -> Ordering {
        match self {
            Self::DaysUntilStockOut => a.days_until_stock_out.cmp(&b.days_until_stock_out),
            Self::Confidence => b.confidence.total_cmp(&a.confidence),
            Self::RecommendedOrder => b.recommended_order.cmp(&a.recommended_order),
            Self::PredictedDemand => b.predicted_demand.cmp(&a.predicted_demand),
        }
    }
}

/// Stable sort by `key`; ties keep their current order.
pub fn sort_predictions(predictions: &mut [PredictionData], key: PredictionSortKey) {
    predictions.sort_by(|a, b| key.compare(a, b));
}

/// Predictions per urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyDistribution {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl UrgencyDistribution {
    pub fn get(&self, level: UrgencyLevel) -> usize {
        match level {
            UrgencyLevel::Critical => self.critical,
            UrgencyLevel::High => self.high,
            UrgencyLevel::Medium => self.medium,
            UrgencyLevel::Low => self.low,
        }
    }
}

pub fn urgency_distribution(predictions: &[PredictionData]) -> UrgencyDistribution {
    let mut dist = UrgencyDistribution::default();
    for p in predictions {
        match UrgencyLevel::from_days(p.days_until_stock_out) {
            UrgencyLevel::Critical => dist.critical += 1,
            UrgencyLevel::High => dist.high += 1,
            UrgencyLevel::Medium => dist.medium += 1,
            UrgencyLevel::Low => dist.low += 1,
        }
    }
    dist
}

/// Headline figures over a set of predictions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub total_items: usize,
    /// Predictions running out within [`URGENT_WITHIN_DAYS`].
    pub urgent_items: usize,
    pub high_confidence: usize,
    /// Recommended units priced at [`RECOMMENDED_UNIT_VALUE`] each.
    pub total_recommended_value: f64,
    /// Mean confidence, 0 for no predictions.
    pub average_confidence: f64,
}

impl PredictionSummary {
    pub fn from_predictions<'a, I>(predictions: I) -> Self
    where
        I: IntoIterator<Item = &'a PredictionData>,
    {
        let mut summary = Self::default();
        let mut confidence_sum = 0.0;

        for p in predictions {
            summary.total_items += 1;
            if p.days_until_stock_out <= URGENT_WITHIN_DAYS {
                summary.urgent_items += 1;
            }
            if ConfidenceLevel::from_confidence(p.confidence) == ConfidenceLevel::High {
                summary.high_confidence += 1;
            }
            summary.total_recommended_value += f64::from(p.recommended_order) * RECOMMENDED_UNIT_VALUE;
            confidence_sum += p.confidence;
        }

        if summary.total_items > 0 {
            summary.average_confidence = confidence_sum / summary.total_items as f64;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_core::{Seasonality, NO_FORESEEABLE_STOCKOUT};

    fn prediction(id: &str, name: &str, days: u32, confidence: f64, order: u32) -> PredictionData {
        PredictionData {
            product_id: id.to_string(),
            product_name: name.to_string(),
            current_stock: 10,
            predicted_demand: 100 + order,
            recommended_order: order,
            confidence,
            days_until_stock_out: days,
            trend: Trend::Stable,
            seasonality: Seasonality::Low,
        }
    }

    #[test]
    fn test_urgency_boundaries() {
        assert_eq!(UrgencyLevel::from_days(1), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_days(7), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_days(8), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_days(14), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_days(15), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::from_days(30), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::from_days(31), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::from_days(NO_FORESEEABLE_STOCKOUT), UrgencyLevel::Low);
    }

    #[test]
    fn test_confidence_boundaries() {
        assert_eq!(ConfidenceLevel::from_confidence(0.8), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(0.79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.6), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.59), ConfidenceLevel::Low);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            prediction("INV-0001", "Wireless Mouse", 5, 0.9, 10),
            prediction("INV-0002", "Office Chair", 20, 0.7, 5),
        ];
        assert_eq!(PredictionFilter::new().with_search("MOUSE").apply(&items).len(), 1);
        assert_eq!(PredictionFilter::new().with_search("inv-0002").apply(&items).len(), 1);
        assert_eq!(PredictionFilter::new().with_search("inv").apply(&items).len(), 2);
        assert!(PredictionFilter::new().with_search("lamp").apply(&items).is_empty());
    }

    #[test]
    fn test_combined_filter() {
        let items = vec![
            prediction("INV-0001", "A", 5, 0.9, 10),
            prediction("INV-0002", "B", 5, 0.7, 10),
            prediction("INV-0003", "C", 20, 0.9, 10),
        ];
        let hits = PredictionFilter::new()
            .with_urgency(UrgencyLevel::Critical)
            .with_confidence(ConfidenceLevel::High)
            .apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_id, "INV-0001");
        assert!(PredictionFilter::new()
            .with_trend(Trend::Increasing)
            .apply(&items)
            .is_empty());
    }

    #[test]
    fn test_sort_keys() {
        let mut items = vec![
            prediction("INV-0001", "A", 20, 0.7, 30),
            prediction("INV-0002", "B", 3, 0.95, 10),
            prediction("INV-0003", "C", 999, 0.8, 0),
        ];

        sort_predictions(&mut items, PredictionSortKey::DaysUntilStockOut);
        assert_eq!(items[0].product_id, "INV-0002");
        assert_eq!(items[2].product_id, "INV-0003");

        sort_predictions(&mut items, PredictionSortKey::Confidence);
        assert_eq!(items[0].product_id, "INV-0002");
        assert_eq!(items[2].product_id, "INV-0001");

        sort_predictions(&mut items, PredictionSortKey::RecommendedOrder);
        assert_eq!(items[0].product_id, "INV-0001");

        sort_predictions(&mut items, PredictionSortKey::PredictedDemand);
        assert_eq!(items[0].product_id, "INV-0001");
        assert_eq!(items[2].product_id, "INV-0003");
    }

    #[test]
    fn test_distribution_and_summary() {
        let items = vec![
            prediction("INV-0001", "A", 7, 0.8, 10),
            prediction("INV-0002", "B", 14, 0.6, 20),
            prediction("INV-0003", "C", 30, 0.7, 0),
            prediction("INV-0004", "D", 999, 0.9, 0),
        ];

        let dist = urgency_distribution(&items);
        assert_eq!((dist.critical, dist.high, dist.medium, dist.low), (1, 1, 1, 1));
        assert_eq!(dist.get(UrgencyLevel::Low), 1);

        let summary = PredictionSummary::from_predictions(&items);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.urgent_items, 3);
        assert_eq!(summary.high_confidence, 2);
        assert_eq!(summary.total_recommended_value, 1500.0);
        assert!((summary.average_confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let none: Vec<PredictionData> = Vec::new();
        let summary = PredictionSummary::from_predictions(&none);
        assert_eq!(summary, PredictionSummary::default());
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let items = vec![prediction("INV-0001", "A", 5, 0.9, 10)];
        let json = serde_json::to_value(PredictionSummary::from_predictions(&items)).unwrap();

        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["urgentItems"], 1);
        assert_eq!(json["highConfidence"], 1);
        assert_eq!(json["totalRecommendedValue"], 500.0);
        assert!(json.get("total_items").is_none());
    }
}
