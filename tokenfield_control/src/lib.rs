// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tokenfield_control --heading-base-level=0

//! Tokenfield Control: the input state machine behind a token input field.
//!
//! ## Overview
//!
//! This crate interprets the events a host toolkit feeds a token field —
//! typed characters, the confirm action, backspace on an empty text
//! primitive, focus changes, taps, resizes — and turns them into collection
//! mutations, relayouts, and an ordered sequence of notifications. It does
//! not render and it does not measure; it composes
//! [`tokenfield_collection`] with [`tokenfield_layout`] behind the two
//! host-supplied seams, [`Measure`](tokenfield_layout::Measure) and
//! [`Tokenizer`](crate::types::Tokenizer).
//!
//! ## Modes
//!
//! A field is in exactly one of three modes, derived from host configuration
//! and focus (never stored): `Editing` (multi-line, trailing text-entry
//! slot), `Collapsed` (one summary line while a collapsible field is not
//! focused), and `StaticDisplay` (read-only; user gestures are ignored,
//! host-driven mutation still works). See [`types::Mode`].
//!
//! ## Notifications
//!
//! Every mutating operation returns the [`types::Events`] it produced,
//! computed after all internal state has settled — a host may mutate the
//! field again from inside its reaction without observing torn state. Height
//! changes are deduplicated: a relayout that lands on the previously
//! reported height emits nothing. Hosts that prefer callback style install
//! [`handlers::Handlers`] slots and feed each returned sequence to
//! [`Handlers::deliver`](handlers::Handlers::deliver).
//!
//! ## Example
//!
//! ```
//! use kurbo::Size;
//! use tokenfield_collection::Token;
//! use tokenfield_control::field::TokenField;
//! use tokenfield_control::types::{FieldEvent, Tokenizer};
//! use tokenfield_layout::Measure;
//!
//! // Fixed-width measurement stands in for the host's font machinery.
//! struct Mono;
//! impl Measure for Mono {
//!     fn text_width(&self, text: &str) -> f64 {
//!         text.chars().count() as f64 * 8.0
//!     }
//!     fn chip_size(&self, label: &str) -> Size {
//!         Size::new(self.text_width(label) + 12.0, 20.0)
//!     }
//! }
//!
//! // Accept anything containing '@' as a recipient.
//! struct Emails;
//! impl Tokenizer<()> for Emails {
//!     fn try_tokenize(&mut self, fragment: &str) -> Option<Token<()>> {
//!         fragment.contains('@').then(|| Token::new(fragment, ()))
//!     }
//! }
//!
//! let mut field = TokenField::new(Mono, Emails);
//! let _ = field.set_available_width(320.0);
//! field.set_trigger_chars([',']);
//!
//! for c in "ada@example.com".chars() {
//!     let _ = field.type_char(c);
//! }
//! let events = field.type_char(',');
//!
//! assert!(matches!(events[0], FieldEvent::TokenAdded { index: 0, .. }));
//! assert_eq!(field.fragment(), "");
//! assert_eq!(field.tokens().labels().collect::<Vec<_>>(), vec!["ada@example.com"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod field;
pub mod handlers;
pub mod types;

pub use field::TokenField;
pub use handlers::Handlers;
pub use types::{ConfirmOutcome, Events, FieldEvent, FieldFlags, Mode, NoTokenizer, Tokenizer};
