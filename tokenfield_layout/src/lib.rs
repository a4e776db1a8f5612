// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tokenfield_layout --heading-base-level=0

//! Tokenfield Layout: a Kurbo-native line arrangement for token input fields.
//!
//! Given the chip sizes of the current tokens, an available content width, and
//! per-line style constants, this crate computes which tokens go on which
//! line, where the trailing text-entry slot sits, and the field's total
//! height. It is a pure function of its inputs: feed it the same chips, width,
//! and metrics and you get an identical [`Arrangement`] back.
//!
//! ## Not a renderer
//!
//! This crate does not paint chips or measure text. Measurement is supplied by
//! the host through the [`Measure`] trait (backed by whatever font machinery
//! the embedding toolkit has), and the resulting [`Arrangement`] is plain
//! geometry for the host to paint and hit-test against.
//!
//! ## Wrapping rules
//!
//! - Tokens are placed greedily, left to right, in display order.
//! - A token that would overflow the current line starts a new line — unless
//!   the line is still empty, in which case the token stays and may visually
//!   overflow. A chip is never split or truncated.
//! - In editing mode a text-entry slot is reserved after the last token; if
//!   the remaining width on that line is below
//!   [`StyleMetrics::text_slot_min_width`], the slot moves to a fresh line.
//! - A collapsed field is a single synthetic summary line regardless of how
//!   many tokens it holds; see [`arrange_collapsed`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use tokenfield_layout::{arrange, ArrangeParams, StyleMetrics};
//!
//! let metrics = StyleMetrics::default();
//! let chips = vec![Size::new(90.0, 20.0), Size::new(90.0, 20.0), Size::new(90.0, 20.0)];
//! let out = arrange(
//!     &chips,
//!     &ArrangeParams {
//!         available_width: 220.0,
//!         metrics: &metrics,
//!         label_width: 0.0,
//!         text_slot: true,
//!     },
//! );
//!
//! // Two chips fit per line; the third wraps.
//! assert_eq!(out.lines.len(), 2);
//! assert_eq!(out.lines[0].indices().count(), 2);
//! assert!(out.text_slot.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arrange;
pub mod metrics;

pub use arrange::{Arrangement, ArrangeParams, Line, Placement, arrange, arrange_collapsed};
pub use metrics::{Measure, StyleMetrics};
