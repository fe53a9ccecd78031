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

//! Order search and status counts.

use serde::Serialize;
use stockpulse_core::{Order, OrderStatus};

/// Order filter. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Case-insensitive substring of the order id, customer name or
    /// tracking number.
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            order.id.to_lowercase().contains(&term)
                || order.customer_name.to_lowercase().contains(&term)
                || order
                    .tracking_number
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(&term))
        });
        search_ok && self.status.map_or(true, |s| order.status == s)
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

/// Orders per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl OrderStatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipped => self.shipped,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

pub fn status_counts(orders: &[Order]) -> OrderStatusCounts {
    let mut counts = OrderStatusCounts::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Processing => counts.processing += 1,
            OrderStatus::Shipped => counts.shipped += 1,
            OrderStatus::Delivered => counts.delivered += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}
