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

//! Human-readable digest of a snapshot.

use super::{build_generator, write_output};
use crate::cli::GlobalArgs;
use crate::error::CliError;
use colored::Colorize;
use std::fmt::Write as _;
use stockpulse_analytics::{
    category_distribution, format_currency, format_time_ago, high_severity_count, percent_change,
    severity_counts, status_counts, ChangeDirection, PredictionSummary, SalesSummary,
    StockStatusCounts,
};
use stockpulse_core::OrderStatus;
use stockpulse_synth::Snapshot;

/// Categories listed in the inventory section.
const TOP_CATEGORIES: usize = 3;

/// Predictions listed under "Most urgent".
const MOST_URGENT: usize = 5;

/// Generate a snapshot and print its digest.
pub fn summary(global: &GlobalArgs) -> Result<(), CliError> {
    let snapshot = Snapshot::generate(&mut build_generator(global)?)?;
    if global.output.is_some() {
        colored::control::set_override(false);
    }
    write_output(&render_summary(&snapshot), global.output.as_deref())
}

/// Render the digest of `snapshot` as text.
pub fn render_summary(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let now = snapshot.generated_at;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", "StockPulse Summary".bold());
    let _ = writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M UTC"));

    section(&mut out, "Inventory");
    let stock = StockStatusCounts::from_items(&snapshot.inventory);
    line(&mut out, "Products", snapshot.inventory.len().to_string());
    line(&mut out, "Stock value", format_currency(snapshot.dashboard.total_value));
    line(
        &mut out,
        "Status",
        format!(
            "{} in stock, {} low, {} out, {} expired",
            stock.in_stock,
            stock.low_stock.to_string().yellow(),
            stock.out_of_stock.to_string().red(),
            stock.expired.to_string().red()
        ),
    );
    let categories = category_distribution(&snapshot.inventory)
        .iter()
        .take(TOP_CATEGORIES)
        .map(|c| format!("{} ({})", c.category, c.count))
        .collect::<Vec<_>>()
        .join(", ");
    line(&mut out, "Categories", categories);

    section(&mut out, "Sales");
    let sales = SalesSummary::from_sales(&snapshot.sales);
    let today = snapshot.dashboard.today_sales;
    let yesterday = snapshot.dashboard.yesterday_sales;
    let change = percent_change(today, yesterday);
    let change = match ChangeDirection::between(today, yesterday) {
        ChangeDirection::Positive => change.green(),
        ChangeDirection::Negative => change.red(),
        ChangeDirection::Neutral => change.normal(),
    };
    line(&mut out, "Revenue", format_currency(sales.total_sales));
    line(&mut out, "Transactions", sales.transaction_count.to_string());
    line(&mut out, "Average order", format_currency(sales.average_order_value));
    line(&mut out, "Online share", format!("{:.1}%", sales.online_share));
    line(
        &mut out,
        "Today",
        format!("{} ({} vs yesterday)", format_currency(today), change),
    );

    section(&mut out, "Orders");
    let orders = status_counts(&snapshot.orders);
    let by_status = OrderStatus::ALL
        .iter()
        .map(|&s| format!("{} {}", orders.get(s), s))
        .collect::<Vec<_>>()
        .join(", ");
    line(&mut out, "Total", snapshot.orders.len().to_string());
    line(&mut out, "By status", by_status);

    section(&mut out, "Alerts");
    let alerts = severity_counts(&snapshot.alerts);
    line(
        &mut out,
        "Active",
        format!(
            "{} ({} critical, {} high, {} medium, {} low)",
            alerts.total(),
            alerts.critical.to_string().red().bold(),
            alerts.high.to_string().red(),
            alerts.medium.to_string().yellow(),
            alerts.low
        ),
    );
    if let Some(latest) = snapshot.alerts.iter().find(|a| a.is_active()) {
        line(
            &mut out,
            "Latest",
            format!("{}, {}", latest.title, format_time_ago(latest.timestamp, now)),
        );
    }

    section(&mut out, "Predictions");
    let predictions = PredictionSummary::from_predictions(&snapshot.predictions);
    line(&mut out, "Urgent items", predictions.urgent_items.to_string());
    line(&mut out, "High confidence", predictions.high_confidence.to_string());
    line(
        &mut out,
        "Avg confidence",
        format!("{:.1}%", predictions.average_confidence * 100.0),
    );
    line(
        &mut out,
        "Reorder value",
        format_currency(predictions.total_recommended_value),
    );
    let urgent: Vec<_> = snapshot
        .predictions
        .iter()
        .filter(|p| p.has_foreseeable_stockout())
        .take(MOST_URGENT)
        .collect();
    if !urgent.is_empty() {
        let _ = writeln!(out, "  {}", "Most urgent:".bold());
        for p in urgent {
            let _ = writeln!(
                out,
                "    {:<28} {:>3} days, order {}",
                p.product_name, p.days_until_stock_out, p.recommended_order
            );
        }
    }

    section(&mut out, "Operations");
    line(
        &mut out,
        "Bottlenecks",
        format!(
            "{} ({} high severity)",
            snapshot.bottlenecks.len(),
            high_severity_count(&snapshot.bottlenecks)
        ),
    );
    line(
        &mut out,
        "On-time delivery",
        format!("{:.1}%", snapshot.performance.on_time_delivery_rate),
    );
    line(
        &mut out,
        "Utilization",
        format!("{:.1}%", snapshot.performance.warehouse_utilization),
    );

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title.cyan().bold());
}

fn line(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "  {:<18} {}", format!("{}:", label), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_synth::Generator;

    #[test]
    fn test_digest_sections() {
        let snapshot = Snapshot::generate(&mut Generator::seeded(17)).unwrap();
        let text = render_summary(&snapshot);

        for heading in ["Inventory", "Sales", "Orders", "Alerts", "Predictions", "Operations"] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains(&snapshot.inventory.len().to_string()));
        assert!(text.contains('£'));
    }
}
