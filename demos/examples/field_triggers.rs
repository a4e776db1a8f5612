// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger characters and handler slots.
//!
//! Installs `','` as a tokenization trigger, matches fragments against a
//! pre-resolved candidate list, and dispatches the returned event sequences
//! through `Handlers` — the callback-style surface a host embeds.
//!
//! Run:
//! - `cargo run -p tokenfield_demos --example field_triggers`

use kurbo::Size;
use tokenfield_collection::Token;
use tokenfield_control::field::TokenField;
use tokenfield_control::handlers::Handlers;
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

/// Matches typed prefixes against a fixed candidate list, the way a host
/// would match against autocomplete results it already fetched.
struct Candidates(Vec<&'static str>);

impl Tokenizer<&'static str> for Candidates {
    fn try_tokenize(&mut self, fragment: &str) -> Option<Token<&'static str>> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.0
            .iter()
            .find(|c| c.to_lowercase().starts_with(&needle))
            .map(|&c| Token::new(c, c))
    }
}

fn main() {
    let candidates = Candidates(vec![
        "Ada Lovelace",
        "Alan Turing",
        "Grace Hopper",
        "Barbara Liskov",
    ]);

    let mut field = TokenField::new(Mono, candidates);
    let _ = field.set_available_width(320.0);
    field.set_trigger_chars([',']);

    let mut handlers: Handlers<'_, &'static str> = Handlers::new();
    handlers.on_token_added = Some(Box::new(|id, index| {
        println!("  -> token {id:?} added at {index}");
    }));
    handlers.on_text_changed = Some(Box::new(|text| {
        println!("  -> autocomplete query: {text:?}");
    }));
    handlers.on_height_changed = Some(Box::new(|height| {
        println!("  -> height now {height}");
    }));

    // "gra," matches Grace Hopper; the comma is consumed.
    println!("typing \"gra,\"");
    for c in "gra,".chars() {
        handlers.deliver(field.type_char(c));
    }

    // "zzz," matches nothing; the comma lands in the fragment as text.
    println!("typing \"zzz,\"");
    for c in "zzz,".chars() {
        handlers.deliver(field.type_char(c));
    }
    println!("fragment now: {:?}", field.fragment());

    // Clear the junk, then accept a second candidate with the confirm key.
    handlers.deliver(field.set_fragment(""));
    println!("typing \"ada\" then confirm");
    for c in "ada".chars() {
        handlers.deliver(field.type_char(c));
    }
    let outcome = field.confirm();
    handlers.deliver(outcome.events);
    drop(handlers);

    let labels: Vec<&str> = field.tokens().labels().collect();
    println!("accepted: {labels:?}");
}
