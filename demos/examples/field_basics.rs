// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token field basics.
//!
//! This minimal example grows a field one recipient at a time, prints the
//! line-by-line arrangement after each accepted token, and shows the height
//! notifications a host would use to resize the surrounding form.
//!
//! Run:
//! - `cargo run -p tokenfield_demos --example field_basics`

use kurbo::Size;
use tokenfield_collection::Token;
use tokenfield_control::field::TokenField;
use tokenfield_control::types::{FieldEvent, Tokenizer};
use tokenfield_layout::Measure;

/// Fixed-width measurement; a real host would measure with its font stack.
struct Mono;
impl Measure for Mono {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * 8.0
    }
    fn chip_size(&self, label: &str) -> Size {
        Size::new(self.text_width(label) + 12.0, 20.0)
    }
}

/// Accept anything that looks vaguely like an address.
struct Emails;
impl Tokenizer<()> for Emails {
    fn try_tokenize(&mut self, fragment: &str) -> Option<Token<()>> {
        fragment.contains('@').then(|| Token::new(fragment.trim(), ()))
    }
}

fn print_arrangement(field: &TokenField<(), Mono, Emails>) {
    let arrangement = field.arrangement();
    for (row, line) in arrangement.lines.iter().enumerate() {
        let indices: Vec<usize> = line.indices().collect();
        println!("  line {row}: tokens {indices:?}");
    }
    if let Some(slot) = arrangement.text_slot {
        println!("  text slot at x={} (width {})", slot.x0, slot.width());
    }
    println!("  total height: {}", arrangement.total_height);
}

fn main() {
    let mut field = TokenField::new(Mono, Emails);
    let _ = field.set_available_width(300.0);
    let _ = field.set_field_label(Some("To:".into()));

    println!("== Empty field ==");
    print_arrangement(&field);

    for recipient in [
        "ada@example.com",
        "grace@example.com",
        "edsger@example.com",
        "barbara@example.com",
    ] {
        for c in recipient.chars() {
            let _ = field.type_char(c);
        }
        let outcome = field.confirm();
        for event in &outcome.events {
            if let FieldEvent::HeightChanged(h) = event {
                println!("(host resizes the form: height -> {h})");
            }
        }
        println!("== After accepting {recipient:?} ==");
        print_arrangement(&field);
    }

    // Backspace on the empty text primitive peels tokens off the end.
    let events = field.backspace_on_empty();
    for event in events {
        if let FieldEvent::TokenRemoved { token, index } = event {
            println!("removed {:?} from index {index}", token.label);
        }
    }
    print_arrangement(&field);
}
