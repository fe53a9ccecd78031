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

//! Daily chart series.

use crate::random::between;
use crate::Generator;
use stockpulse_core::{Result, SeriesKind, TimeSeriesPoint};

impl Generator {
    /// One point per day for the `days` days ending on `now`'s date, oldest
    /// first. Values are drawn uniformly from [`SeriesKind::value_range`].
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::CountTooLarge`](stockpulse_core::SynthError) if
    /// `days` exceeds the configured ceiling, or
    /// [`SynthError::DateOutOfRange`](stockpulse_core::SynthError) if the
    /// first day precedes the supported calendar.
    pub fn generate_time_series_data(
        &mut self,
        days: usize,
        kind: SeriesKind,
    ) -> Result<Vec<TimeSeriesPoint>> {
        self.check_count(days)?;
        if let Some(oldest) = days.checked_sub(1) {
            self.days_before(oldest)?;
        }
        let (min, max) = kind.value_range();

        let mut series = Vec::with_capacity(days);
        for offset in (0..days).rev() {
            series.push(TimeSeriesPoint {
                date: self.days_before(offset)?.date_naive(),
                value: between(&mut self.rng, min, max),
                category: None,
            });
        }
        Ok(series)
    }
}
