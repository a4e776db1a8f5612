// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsing on focus loss.
//!
//! A collapsible field folds to a single summary line whenever it is not
//! focused, however many tokens it holds, and expands back to the wrapped
//! multi-line view on focus. This example walks through one round trip and
//! prints the height at each step.
//!
//! Run:
//! - `cargo run -p tokenfield_demos --example field_collapse`

use kurbo::Size;
use tokenfield_collection::Token;
use tokenfield_control::field::TokenField;
use tokenfield_control::types::{Mode, NoTokenizer};
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

fn describe(field: &TokenField<(), Mono, NoTokenizer>) {
    let arrangement = field.arrangement();
    match field.mode() {
        Mode::Collapsed => {
            let summary = arrangement.summary.expect("collapsed fields have a summary line");
            println!(
                "collapsed: 1 line, height {}, summary width {}",
                arrangement.total_height,
                summary.width()
            );
        }
        mode => {
            println!(
                "{mode:?}: {} lines, height {}",
                arrangement.line_count, arrangement.total_height
            );
        }
    }
}

fn main() {
    let mut field = TokenField::new(Mono, NoTokenizer);
    let _ = field.set_available_width(240.0);
    let _ = field.set_collapsible(true);

    // Tokens are host-driven here (picked from an address book, say).
    for name in ["annie", "bonnie", "connie", "donnie"] {
        let _ = field.add_token(Token::new(format!("{name}@example.com"), ()));
    }

    println!("== Not focused ==");
    describe(&field);

    println!("== Focus gained ==");
    let _ = field.begin_editing();
    describe(&field);

    println!("== Focus lost ==");
    let _ = field.end_editing();
    describe(&field);
}
