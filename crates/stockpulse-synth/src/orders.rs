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

//! Order generation.

use crate::random::{between, instant_between, pick, uniform};
use crate::Generator;
use chrono::Duration;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use stockpulse_core::{round_cents, InventoryItem, Order, OrderItem, OrderStatus, Result};
use tracing::debug;

impl Generator {
    /// Generate `count` orders against a freshly generated inventory set.
    ///
    /// Each order has 1-5 line items and a status drawn uniformly from the
    /// five statuses. Shipped and delivered orders carry a tracking number
    /// and an estimated delivery within a week of the order date; delivered
    /// orders also carry the actual delivery instant.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::CountTooLarge`](stockpulse_core::SynthError) if
    /// `count` exceeds the configured ceiling.
    pub fn generate_order_data(&mut self, count: usize) -> Result<Vec<Order>> {
        self.check_count(count)?;
        let inventory = self.backing_inventory()?;
        self.derive_orders(&inventory, count)
    }

    /// Generate `count` orders against the given inventory.
    ///
    /// Returns no orders when `inventory` is empty, since an order needs at
    /// least one line item.
    pub fn derive_orders(&mut self, inventory: &[InventoryItem], count: usize) -> Result<Vec<Order>> {
        self.check_count(count)?;
        if inventory.is_empty() {
            return Ok(Vec::new());
        }

        let orders: Vec<Order> = (0..count).map(|i| self.order(inventory, i)).collect();
        debug!(count = orders.len(), "generated orders");
        Ok(orders)
    }

    fn order(&mut self, inventory: &[InventoryItem], index: usize) -> Order {
        let now = self.now;
        let rng = &mut self.rng;
        let serial = index + 1;

        let line_count = between(rng, 1, 5);
        let items: Vec<OrderItem> = (0..line_count)
            .map(|_| {
                let product = pick(rng, inventory);
                let quantity = between(rng, 1, 5);
                let unit_price = round_cents(product.unit_cost * uniform(rng, 1.0, 1.5));
                OrderItem {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    quantity,
                    unit_price,
                    total: round_cents(unit_price * f64::from(quantity)),
                }
            })
            .collect();
        let total = round_cents(items.iter().map(|item| item.total).sum());

        let status = *pick(rng, &OrderStatus::ALL);
        let order_date = instant_between(rng, now - Duration::days(30), now);

        let (tracking_number, estimated_delivery) = if status.has_tracking() {
            (
                Some(format!("TRK-{:08}", serial)),
                Some(instant_between(rng, order_date, order_date + Duration::days(7))),
            )
        } else {
            (None, None)
        };
        let actual_delivery =
            (status == OrderStatus::Delivered).then(|| instant_between(rng, order_date, now));

        let first: String = FirstName().fake_with_rng(rng);
        let last: String = LastName().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let house = between(rng, 1, 999);

        Order {
            id: format!("ORD-{:06}", serial),
            customer_email: format!(
                "{}.{}{}@example.com",
                email_part(&first),
                email_part(&last),
                serial
            ),
            customer_name: format!("{} {}", first, last),
            order_date,
            status,
            items,
            total,
            shipping_address: format!("{} {}, {}", house, street, city),
            tracking_number,
            estimated_delivery,
            actual_delivery,
        }
    }
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
