// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use tokenfield_collection::Token;
use tokenfield_control::field::TokenField;
use tokenfield_control::types::Tokenizer;
use tokenfield_layout::Measure;

struct Mono;
impl Measure for Mono {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * 8.0
    }
    fn chip_size(&self, label: &str) -> Size {
        Size::new(self.text_width(label) + 12.0, 20.0)
    }
}

struct Echo;
impl Tokenizer<()> for Echo {
    fn try_tokenize(&mut self, fragment: &str) -> Option<Token<()>> {
        (!fragment.is_empty()).then(|| Token::new(fragment, ()))
    }
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("recipient-{i}@example.com")).collect()
}

// Each add relayouts the whole field synchronously; this tracks the cost of
// growing a field one accepted token at a time.
fn bench_add_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_add");
    for n in [8_usize, 64, 256] {
        let labels = labels(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("grow_to_{n}"), |b| {
            b.iter(|| {
                let mut field = TokenField::new(Mono, Echo);
                let _ = field.set_available_width(360.0);
                for label in &labels {
                    black_box(field.add_token(Token::new(label.as_str(), ())));
                }
                field.total_height()
            });
        });
    }
    group.finish();
}

fn bench_type_and_trigger(c: &mut Criterion) {
    c.bench_function("field_type_and_trigger", |b| {
        b.iter(|| {
            let mut field = TokenField::new(Mono, Echo);
            let _ = field.set_available_width(360.0);
            field.set_trigger_chars([',']);
            for _ in 0..32 {
                for ch in "someone@example.com".chars() {
                    black_box(field.type_char(ch));
                }
                black_box(field.type_char(','));
            }
            field.tokens().len()
        });
    });
}

criterion_group!(benches, bench_add_relayout, bench_type_and_trigger);
criterion_main!(benches);
