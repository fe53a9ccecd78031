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

//! Warehouse bottleneck fixtures.

use stockpulse_core::{
    BottleneckData, BottleneckSeverity, BottleneckType, ThroughputMetrics,
};

/// The four standing bottlenecks of the reference warehouse.
///
/// Fixture data: consumes no randomness and returns the same records on every
/// call.
pub fn generate_bottleneck_data() -> Vec<BottleneckData> {
    vec![
        bottleneck(
            "Picking Zone A",
            BottleneckType::Picking,
            BottleneckSeverity::High,
            "Congestion in main picking aisle during peak hours",
            "Reduced picking efficiency by 25%",
            "Implement zone picking strategy and add additional picker",
            75,
        ),
        bottleneck(
            "Packing Station 3",
            BottleneckType::Packing,
            BottleneckSeverity::Medium,
            "Equipment malfunction causing delays",
            "Increased packing time by 15 minutes per order",
            "Schedule maintenance and have backup equipment ready",
            85,
        ),
        bottleneck(
            "Loading Dock B",
            BottleneckType::Shipping,
            BottleneckSeverity::Low,
            "Truck scheduling conflicts during morning shift",
            "Minor delays in outbound shipments",
            "Optimize truck scheduling system",
            90,
        ),
        bottleneck(
            "Storage Section C",
            BottleneckType::Storage,
            BottleneckSeverity::Medium,
            "Near capacity limit for bulky items",
            "Difficulty in storing new inventory",
            "Reorganize storage layout and consider vertical solutions",
            88,
        ),
    ]
}

/// Build a bottleneck whose throughput is `current` against a target of 100.
fn bottleneck(
    area: &str,
    bottleneck_type: BottleneckType,
    severity: BottleneckSeverity,
    description: &str,
    impact: &str,
    suggestion: &str,
    current: u32,
) -> BottleneckData {
    BottleneckData {
        area: area.to_string(),
        bottleneck_type,
        severity,
        description: description.to_string(),
        impact: impact.to_string(),
        suggestion: suggestion.to_string(),
        metrics: ThroughputMetrics {
            current_throughput: current,
            target_throughput: 100,
            efficiency: current,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture() {
        let data = generate_bottleneck_data();
        let areas: Vec<_> = data.iter().map(|b| b.area.as_str()).collect();
        assert_eq!(
            areas,
            ["Picking Zone A", "Packing Station 3", "Loading Dock B", "Storage Section C"]
        );
        assert_eq!(data[0].metrics.efficiency, 75);
        assert_eq!(data[3].bottleneck_type, BottleneckType::Storage);
        assert_eq!(data, generate_bottleneck_data());
    }
}
