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

//! The generator: an injected random source, a reference instant and a
//! configuration.

use chrono::{DateTime, Days, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stockpulse_core::{validate_count, InventoryItem, Result, SynthConfig, SynthError};

/// Synthetic warehouse data generator.
///
/// All randomness comes from the generator's own [`StdRng`], and every
/// timestamp is placed relative to its reference instant `now`. Two
/// generators built with the same seed, `now` and configuration produce
/// identical output.
///
/// Top-level operations such as [`Generator::generate_alerts`] build their
/// own backing inventory and order sets on every call, so records from two
/// calls never share identity. To derive several views from one dataset, use
/// the `derive_*` methods or [`Snapshot`](crate::Snapshot).
///
/// # Examples
///
/// ```
/// use stockpulse_synth::Generator;
///
/// let mut gen = Generator::seeded(42);
/// let items = gen.generate_inventory_data(10).unwrap();
/// assert_eq!(items.len(), 10);
/// assert_eq!(items[0].id, "INV-0001");
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    pub(crate) rng: StdRng,
    pub(crate) now: DateTime<Utc>,
    pub(crate) config: SynthConfig,
}

impl Generator {
    /// Deterministic generator seeded with `seed`, anchored at the current
    /// time.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            now: Utc::now(),
            config: SynthConfig::default(),
        }
    }

    /// Anchor all generated timestamps at `now`.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Replace the configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`SynthConfig::validate`].
    pub fn with_config(mut self, config: SynthConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The reference instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The active configuration.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub(crate) fn check_count(&self, count: usize) -> Result<()> {
        validate_count(count, self.config.max_count)
    }

    /// The instant `days` whole days before `now`.
    pub(crate) fn days_before(&self, days: usize) -> Result<DateTime<Utc>> {
        u64::try_from(days)
            .ok()
            .and_then(|d| self.now.checked_sub_days(Days::new(d)))
            .ok_or(SynthError::DateOutOfRange { days })
    }

    /// Fresh inventory of the configured default size, used as backing data
    /// by the other generators.
    pub(crate) fn backing_inventory(&mut self) -> Result<Vec<InventoryItem>> {
        self.generate_inventory_data(self.config.default_inventory_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpulse_core::SynthError;

    #[test]
    fn test_with_config_validates() {
        let bad = SynthConfig::new().with_expiry_probability(-0.1);
        assert!(matches!(
            Generator::seeded(1).with_config(bad),
            Err(SynthError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_count_ceiling() {
        let gen = Generator::seeded(1)
            .with_config(SynthConfig::new().with_max_count(1500))
            .unwrap();
        assert!(gen.check_count(1500).is_ok());
        assert_eq!(
            gen.check_count(1501),
            Err(SynthError::CountTooLarge {
                requested: 1501,
                max: 1500
            })
        );
    }

    #[test]
    fn test_days_before_out_of_range() {
        let gen = Generator::seeded(1).with_now(DateTime::<Utc>::MIN_UTC);
        assert_eq!(
            gen.days_before(1),
            Err(SynthError::DateOutOfRange { days: 1 })
        );
    }
}
