// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use tokenfield_layout::{ArrangeParams, StyleMetrics, arrange, arrange_collapsed};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_chips(n: usize, seed: u64) -> Vec<Size> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| Size::new(30.0 + rng.next_f64() * 120.0, 20.0))
        .collect()
}

fn bench_arrange(c: &mut Criterion) {
    let metrics = StyleMetrics::default();
    let mut group = c.benchmark_group("arrange");
    for n in [8_usize, 64, 512] {
        let chips = gen_chips(n, 0x5eed_0001);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("wrap_{n}_tokens"), |b| {
            b.iter(|| {
                arrange(
                    black_box(&chips),
                    &ArrangeParams {
                        available_width: 360.0,
                        metrics: &metrics,
                        label_width: 24.0,
                        text_slot: true,
                    },
                )
            });
        });
    }
    group.finish();
}

fn bench_arrange_widths(c: &mut Criterion) {
    let metrics = StyleMetrics::default();
    let chips = gen_chips(128, 0x5eed_0002);
    let mut group = c.benchmark_group("arrange_widths");
    for width in [120.0_f64, 360.0, 1440.0] {
        group.bench_function(format!("width_{width}"), |b| {
            b.iter(|| {
                arrange(
                    black_box(&chips),
                    &ArrangeParams {
                        available_width: width,
                        metrics: &metrics,
                        label_width: 0.0,
                        text_slot: true,
                    },
                )
            });
        });
    }
    group.finish();
}

fn bench_collapsed(c: &mut Criterion) {
    let metrics = StyleMetrics::default();
    c.bench_function("arrange_collapsed", |b| {
        b.iter_batched(
            || 4096.0_f64,
            |summary_width| {
                arrange_collapsed(
                    black_box(summary_width),
                    &ArrangeParams {
                        available_width: 360.0,
                        metrics: &metrics,
                        label_width: 24.0,
                        text_slot: false,
                    },
                )
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_arrange, bench_arrange_widths, bench_collapsed);
criterion_main!(benches);
