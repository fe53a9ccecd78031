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

//! Alert filtering and state transitions.

use serde::Serialize;
use stockpulse_core::{Alert, Severity};

/// Which alerts to show.
///
/// Resolved alerts are hidden unless `show_resolved` is set. A `None`
/// severity matches every severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub severity: Option<Severity>,
    pub show_resolved: bool,
}

impl AlertFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_resolved(mut self, show_resolved: bool) -> Self {
        self.show_resolved = show_resolved;
        self
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        let severity_ok = self.severity.map_or(true, |s| alert.severity == s);
        severity_ok && (self.show_resolved || !alert.is_resolved)
    }

    /// Alerts passing the filter, in their original order.
    pub fn apply<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        alerts.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Unresolved alerts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Count unresolved alerts per severity.
pub fn severity_counts(alerts: &[Alert]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for alert in alerts.iter().filter(|a| !a.is_resolved) {
        match alert.severity {
            Severity::Critical => counts.critical += 1,
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
    }
    counts
}

/// Unread alerts, resolved or not.
pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.is_read).count()
}

/// Mark the alert with `id` as read. Returns whether an alert matched.
pub fn mark_read(alerts: &mut [Alert], id: &str) -> bool {
    update(alerts, id, |alert| alert.is_read = true)
}

/// Mark the alert with `id` as resolved. Returns whether an alert matched.
///
/// Resolving does not mark the alert as read.
pub fn resolve(alerts: &mut [Alert], id: &str) -> bool {
    update(alerts, id, |alert| alert.is_resolved = true)
}

fn update(alerts: &mut [Alert], id: &str, apply: impl FnOnce(&mut Alert)) -> bool {
    match alerts.iter_mut().find(|a| a.id == id) {
        Some(alert) => {
            apply(alert);
            true
        }
        None => false,
    }
}
