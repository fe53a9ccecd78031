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

//! Fixed name dictionaries for generated records.

/// Product lines: each category with the five products it stocks.
pub const PRODUCT_LINES: [(&str, [&str; 5]); 8] = [
    (
        "Electronics",
        ["Wireless Headphones", "Smart Watch", "Laptop Charger", "USB Cable", "Phone Case"],
    ),
    ("Clothing", ["T-Shirt", "Jeans", "Sneakers", "Jacket", "Hat"]),
    (
        "Home & Garden",
        ["Garden Hose", "Plant Pot", "LED Bulb", "Cushion", "Candle"],
    ),
    (
        "Sports",
        ["Basketball", "Yoga Mat", "Dumbbells", "Tennis Racket", "Water Bottle"],
    ),
    (
        "Books",
        ["Programming Book", "Novel", "Cookbook", "Magazine", "Journal"],
    ),
    (
        "Automotive",
        ["Car Filter", "Motor Oil", "Brake Pads", "Windshield Wipers", "Floor Mats"],
    ),
    (
        "Health & Beauty",
        ["Shampoo", "Face Cream", "Toothbrush", "Vitamins", "Soap"],
    ),
    (
        "Tools",
        ["Screwdriver Set", "Hammer", "Drill Bits", "Wrench Set", "Measuring Tape"],
    ),
];

/// Number of distinct products in [`PRODUCT_LINES`].
pub const PRODUCT_COUNT: usize = PRODUCT_LINES.len() * 5;

pub const SUPPLIERS: [&str; 5] = [
    "Global Supply Co.",
    "Premium Parts Ltd.",
    "Quick Logistics",
    "Reliable Wholesale",
    "Express Import",
];

pub const LOCATIONS: [&str; 10] = [
    "A1-01", "A1-02", "A2-01", "A2-02", "B1-01", "B1-02", "B2-01", "B2-02", "C1-01", "C1-02",
];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

/// Category and product name for the item at `index`, cycling through the
/// catalogue.
pub fn product_at(index: usize) -> (&'static str, &'static str) {
    let slot = index % PRODUCT_COUNT;
    let (category, names) = PRODUCT_LINES[slot / 5];
    (category, names[slot % 5])
}
