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

//! Revenue figures over sales transactions.

use serde::Serialize;
use stockpulse_core::{SalesChannel, SalesTransaction};

/// Totals over a set of sales.
///
/// All figures are 0 for an empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_sales: f64,
    pub average_order_value: f64,
    pub transaction_count: usize,
    /// Online revenue as a percentage of total revenue.
    pub online_share: f64,
}

impl SalesSummary {
    pub fn from_sales(sales: &[SalesTransaction]) -> Self {
        let total_sales: f64 = sales.iter().map(|s| s.amount).sum();
        let online: f64 = sales
            .iter()
            .filter(|s| s.channel == SalesChannel::Online)
            .map(|s| s.amount)
            .sum();

        Self {
            total_sales,
            average_order_value: if sales.is_empty() {
                0.0
            } else {
                total_sales / sales.len() as f64
            },
            transaction_count: sales.len(),
            online_share: if total_sales > 0.0 {
                online / total_sales * 100.0
            } else {
                0.0
            },
        }
    }
}

/// Revenue taken through one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelRevenue {
    pub channel: SalesChannel,
    pub revenue: f64,
}

/// Revenue per channel, one entry per channel in [`SalesChannel::ALL`]
/// order, zero for channels without sales.
pub fn revenue_by_channel(sales: &[SalesTransaction]) -> Vec<ChannelRevenue> {
    SalesChannel::ALL
        .iter()
        .map(|&channel| ChannelRevenue {
            channel,
            revenue: sales
                .iter()
                .filter(|s| s.channel == channel)
                .map(|s| s.amount)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockpulse_core::CustomerType;

    fn sale(amount: f64, channel: SalesChannel) -> SalesTransaction {
        SalesTransaction {
            id: "SALE-20250101-0001".to_string(),
            date: Utc::now(),
            amount,
            quantity: 1,
            product_id: "INV-0001".to_string(),
            product_name: "Wireless Mouse".to_string(),
            channel,
            customer_type: CustomerType::New,
            region: "London".to_string(),
        }
    }

    #[test]
    fn test_summary() {
        let sales = vec![
            sale(100.0, SalesChannel::Online),
            sale(50.0, SalesChannel::Retail),
            sale(50.0, SalesChannel::Wholesale),
        ];
        let summary = SalesSummary::from_sales(&sales);

        assert_eq!(summary.total_sales, 200.0);
        assert_eq!(summary.transaction_count, 3);
        assert!((summary.average_order_value - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.online_share, 50.0);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(SalesSummary::from_sales(&[]), SalesSummary::default());
    }

    #[test]
    fn test_channel_breakdown() {
        let sales = vec![
            sale(10.0, SalesChannel::Retail),
            sale(15.0, SalesChannel::Retail),
        ];
        let revenue = revenue_by_channel(&sales);

        assert_eq!(revenue.len(), 3);
        assert_eq!(revenue[0].channel, SalesChannel::Online);
        assert_eq!(revenue[0].revenue, 0.0);
        assert_eq!(revenue[1].revenue, 25.0);
    }
}
