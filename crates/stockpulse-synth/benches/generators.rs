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

//! Generator throughput benchmarks.
//!
//! Measures how fast each generator fabricates records at increasing sizes,
//! and the cost of a full coherent snapshot.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stockpulse_synth::{Generator, SeriesKind, Snapshot};

const STANDARD_SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory");
    for size in STANDARD_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut gen = Generator::seeded(42);
            b.iter(|| black_box(gen.generate_inventory_data(size).unwrap()));
        });
    }
    group.finish();
}

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("orders");
    for size in STANDARD_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut gen = Generator::seeded(42);
            let inventory = gen.generate_inventory_data(50).unwrap();
            b.iter(|| black_box(gen.derive_orders(&inventory, size).unwrap()));
        });
    }
    group.finish();
}

fn bench_sales(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales");
    for days in [7usize, 30, 365] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            let mut gen = Generator::seeded(42);
            let inventory = gen.generate_inventory_data(50).unwrap();
            b.iter(|| black_box(gen.derive_sales(&inventory, days).unwrap()));
        });
    }
    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let mut gen = Generator::seeded(42);
    let inventory = gen.generate_inventory_data(1_000).unwrap();
    let orders = gen.derive_orders(&inventory, 1_000).unwrap();

    c.bench_function("derive_alerts", |b| {
        b.iter(|| black_box(gen.derive_alerts(&inventory, &orders)))
    });
    c.bench_function("derive_predictions", |b| {
        b.iter(|| black_box(gen.derive_predictions(&inventory)))
    });
    c.bench_function("time_series_365", |b| {
        b.iter(|| black_box(gen.generate_time_series_data(365, SeriesKind::Sales).unwrap()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot", |b| {
        let mut gen = Generator::seeded(42);
        b.iter(|| black_box(Snapshot::generate(&mut gen).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_inventory,
    bench_orders,
    bench_sales,
    bench_derived,
    bench_snapshot
);
criterion_main!(benches);
