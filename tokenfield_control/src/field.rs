// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed token field: collection + arrangement + input state machine.
//!
//! ## Overview
//!
//! [`TokenField`] owns the token collection, the last computed arrangement,
//! and the editing state, and interprets the events a host feeds it
//! (characters, confirm, backspace-on-empty, focus changes, taps, resizes).
//! Every mutating operation relayouts synchronously before it returns and
//! hands back the ordered [`Events`] it produced, so height notifications
//! always describe a fully settled arrangement.
//!
//! ## Event interpretation
//!
//! - A typed character that matches a configured trigger attempts
//!   tokenization of the current fragment; on success the trigger is
//!   consumed, on rejection it is inserted as ordinary text.
//! - Confirm with a non-empty fragment attempts the same tokenization,
//!   gated by the optional confirm predicate; with an empty fragment the
//!   action is reported unconsumed for the host to handle.
//! - Backspace on an empty fragment removes the last token, one per
//!   keypress.
//!
//! All user-gesture paths are disabled while the field is not editable;
//! host-driven calls ([`TokenField::add_token`],
//! [`TokenField::remove_token`]) always work.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use tokenfield_collection::{Token, TokenCollection, TokenId};
use tokenfield_layout::{
    ArrangeParams, Arrangement, Measure, StyleMetrics, arrange, arrange_collapsed,
};

use crate::types::{ConfirmOutcome, Events, FieldEvent, FieldFlags, Mode, Tokenizer};

/// An embeddable token input field core.
///
/// Generic over the host payload `D`, the measurement provider `M`, and the
/// tokenizer hook `T` — the two seams a rendering toolkit has to fill in.
///
/// ## Usage
///
/// - Construct with [`TokenField::new`], then configure: width, metrics,
///   flags, trigger characters, field label.
/// - Forward events from the native text primitive:
///   [`type_char`](Self::type_char), [`set_fragment`](Self::set_fragment),
///   [`confirm`](Self::confirm),
///   [`backspace_on_empty`](Self::backspace_on_empty).
/// - Forward focus changes: [`begin_editing`](Self::begin_editing) /
///   [`end_editing`](Self::end_editing).
/// - Every call returns the [`Events`] it produced; deliver them through
///   [`Handlers`](crate::handlers::Handlers) or match directly.
/// - Paint and hit-test from [`arrangement`](Self::arrangement).
pub struct TokenField<D, M: Measure, T: Tokenizer<D>> {
    collection: TokenCollection<D>,
    measure: M,
    tokenizer: T,
    metrics: StyleMetrics,
    flags: FieldFlags,
    trigger_chars: Vec<char>,
    confirm_predicate: Option<fn(&str) -> bool>,
    field_label: Option<String>,
    separator: String,
    fragment: String,
    focused: bool,
    available_width: f64,
    arrangement: Arrangement,
    reported_height: Option<f64>,
}

impl<D, M: Measure, T: Tokenizer<D>> core::fmt::Debug for TokenField<D, M, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenField")
            .field("tokens", &self.collection.len())
            .field("mode", &self.mode())
            .field("fragment", &self.fragment)
            .field("available_width", &self.available_width)
            .field("total_height", &self.arrangement.total_height)
            .finish_non_exhaustive()
    }
}

impl<D, M: Measure, T: Tokenizer<D>> TokenField<D, M, T> {
    /// Create an empty, editable, non-collapsible field.
    ///
    /// The initial arrangement is computed immediately (for a zero available
    /// width) and reported through [`total_height`](Self::total_height); no
    /// `HeightChanged` event exists for it, only for later changes. Hosts
    /// normally call [`set_available_width`](Self::set_available_width) right
    /// after construction.
    pub fn new(measure: M, tokenizer: T) -> Self {
        let mut field = Self {
            collection: TokenCollection::new(),
            measure,
            tokenizer,
            metrics: StyleMetrics::default(),
            flags: FieldFlags::default(),
            trigger_chars: Vec::new(),
            confirm_predicate: None,
            field_label: None,
            separator: String::from(", "),
            fragment: String::new(),
            focused: false,
            available_width: 0.0,
            arrangement: Arrangement::default(),
            reported_height: None,
        };
        let _ = field.relayout();
        field
    }

    // --- state accessors ---

    /// Current mode, derived from flags and focus.
    pub fn mode(&self) -> Mode {
        if !self.flags.contains(FieldFlags::EDITABLE) {
            Mode::StaticDisplay
        } else if self.flags.contains(FieldFlags::COLLAPSIBLE) && !self.focused {
            Mode::Collapsed
        } else {
            Mode::Editing
        }
    }

    /// Whether the field currently holds input focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The ordered token collection (read-only).
    pub fn tokens(&self) -> &TokenCollection<D> {
        &self.collection
    }

    /// The in-progress, not-yet-tokenized text.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The last computed arrangement.
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Total field height for the current arrangement.
    pub fn total_height(&self) -> f64 {
        self.arrangement.total_height
    }

    /// Left edge of the text-entry slot, when the arrangement reserves one.
    pub fn text_slot_offset(&self) -> Option<f64> {
        self.arrangement.text_slot_offset()
    }

    // --- host configuration ---

    /// Set the available content width (call on resize).
    pub fn set_available_width(&mut self, width: f64) -> Events<D> {
        let mut events = Vec::new();
        if width != self.available_width {
            self.available_width = width;
            events.extend(self.relayout());
        }
        events
    }

    /// Replace the style constants.
    pub fn set_metrics(&mut self, metrics: StyleMetrics) -> Events<D> {
        let mut events = Vec::new();
        if metrics != self.metrics {
            self.metrics = metrics;
            events.extend(self.relayout());
        }
        events
    }

    /// Set or clear the leading field label (e.g. `"To:"`).
    pub fn set_field_label(&mut self, label: Option<String>) -> Events<D> {
        let mut events = Vec::new();
        if label != self.field_label {
            self.field_label = label;
            events.extend(self.relayout());
        }
        events
    }

    /// Set the separator used between labels in the collapsed summary.
    pub fn set_separator(&mut self, separator: String) -> Events<D> {
        let mut events = Vec::new();
        if separator != self.separator {
            self.separator = separator;
            events.extend(self.relayout());
        }
        events
    }

    /// Allow or forbid user-driven mutation.
    ///
    /// Clearing editability while the field is focused ends editing first, so
    /// a static field can never be focused.
    pub fn set_editable(&mut self, editable: bool) -> Events<D> {
        if editable == self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if !editable && self.focused {
            self.focused = false;
            events.push(FieldEvent::EndEditing);
        }
        self.flags.set(FieldFlags::EDITABLE, editable);
        events.extend(self.relayout());
        events
    }

    /// Enable or disable collapsing on focus loss.
    pub fn set_collapsible(&mut self, collapsible: bool) -> Events<D> {
        if collapsible == self.flags.contains(FieldFlags::COLLAPSIBLE) {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.flags.set(FieldFlags::COLLAPSIBLE, collapsible);
        events.extend(self.relayout());
        events
    }

    /// Replace the set of tokenization trigger characters.
    ///
    /// Empty by default: only the confirm action tokenizes. Hosts typically
    /// add `','` or `' '`.
    pub fn set_trigger_chars(&mut self, chars: impl IntoIterator<Item = char>) {
        self.trigger_chars.clear();
        self.trigger_chars.extend(chars);
    }

    /// Install or clear the "should this confirm complete?" predicate.
    ///
    /// With no predicate installed, confirm is allowed.
    pub fn set_confirm_predicate(&mut self, predicate: Option<fn(&str) -> bool>) {
        self.confirm_predicate = predicate;
    }

    // --- host-driven mutation (works in every mode) ---

    /// Append a token.
    pub fn add_token(&mut self, token: Token<D>) -> Events<D> {
        let mut events = Vec::new();
        let (id, index) = self.collection.push(token);
        events.push(FieldEvent::TokenAdded { id, index });
        events.extend(self.relayout());
        events
    }

    /// Remove a token by identity. Silent no-op when the handle is stale.
    pub fn remove_token(&mut self, id: TokenId) -> Events<D> {
        let mut events = Vec::new();
        if let Some((token, index)) = self.collection.remove(id) {
            events.push(FieldEvent::TokenRemoved { token, index });
            events.extend(self.relayout());
        }
        events
    }

    /// Attempt to tokenize the current fragment outside any gesture.
    ///
    /// Returns the new token's handle when the hook accepts; on rejection (or
    /// an empty fragment) nothing changes.
    pub fn tokenize_pending(&mut self) -> (Option<TokenId>, Events<D>) {
        if self.fragment.is_empty() {
            return (None, Vec::new());
        }
        match self.tokenizer.try_tokenize(&self.fragment) {
            Some(token) => {
                let mut events = Vec::new();
                let id = self.accept_token(token, &mut events);
                (Some(id), events)
            }
            None => (None, Vec::new()),
        }
    }

    // --- focus transitions ---

    /// The field gained focus (or the host wants to start editing).
    ///
    /// Expands a collapsed field back to the full multi-line view. Ignored
    /// while not editable or already focused.
    pub fn begin_editing(&mut self) -> Events<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) || self.focused {
            return Vec::new();
        }
        self.focused = true;
        let mut events = Vec::new();
        events.push(FieldEvent::BeginEditing);
        events.extend(self.relayout());
        events
    }

    /// The field lost focus (or the host wants to stop editing).
    ///
    /// Collapses the field when collapsing is enabled.
    pub fn end_editing(&mut self) -> Events<D> {
        if !self.focused {
            return Vec::new();
        }
        self.focused = false;
        let mut events = Vec::new();
        events.push(FieldEvent::EndEditing);
        events.extend(self.relayout());
        events
    }

    // --- text primitive events (user gestures; disabled when not editable) ---

    /// A character was typed into the text primitive.
    ///
    /// Trigger characters attempt tokenization and are consumed on success;
    /// everything else (including a rejected trigger) extends the fragment.
    pub fn type_char(&mut self, c: char) -> Events<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        if self.trigger_chars.contains(&c)
            && let Some(token) = self.tokenizer.try_tokenize(&self.fragment)
        {
            let mut events = Vec::new();
            self.accept_token(token, &mut events);
            return events;
        }
        self.fragment.push(c);
        let mut events = Vec::new();
        events.push(FieldEvent::TextChanged(self.fragment.clone()));
        events
    }

    /// The text primitive replaced its whole text (paste, IME, programmatic
    /// edit). Forwarded to the host as a text change; triggers are not
    /// scanned.
    pub fn set_fragment(&mut self, text: impl Into<String>) -> Events<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        let text = text.into();
        if text == self.fragment {
            return Vec::new();
        }
        self.fragment = text;
        let mut events = Vec::new();
        events.push(FieldEvent::TextChanged(self.fragment.clone()));
        events
    }

    /// The confirm action (Return) was performed.
    ///
    /// - Non-empty fragment: gated by the confirm predicate (absent means
    ///   allow), then tokenized like a trigger character; the action is
    ///   consumed whether or not the hook accepts.
    /// - Empty fragment: reported unconsumed so the host can treat it as a
    ///   bare submit.
    pub fn confirm(&mut self) -> ConfirmOutcome<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) || self.fragment.is_empty() {
            return ConfirmOutcome {
                consumed: false,
                events: Vec::new(),
            };
        }
        if let Some(allow) = self.confirm_predicate
            && !allow(&self.fragment)
        {
            // Swallowed: no token, fragment untouched.
            return ConfirmOutcome {
                consumed: true,
                events: Vec::new(),
            };
        }
        let mut events = Vec::new();
        if let Some(token) = self.tokenizer.try_tokenize(&self.fragment) {
            self.accept_token(token, &mut events);
        }
        ConfirmOutcome {
            consumed: true,
            events,
        }
    }

    /// Backspace was pressed while the text primitive was already empty.
    ///
    /// Removes the last token; one token per keypress. Ignored when the
    /// collection is empty.
    pub fn backspace_on_empty(&mut self) -> Events<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        match self.collection.last_id() {
            Some(last) => self.remove_token(last),
            None => Vec::new(),
        }
    }

    // --- tap routing (never mutates; see crate docs) ---

    /// A chip was tapped once. Routed only while the field is not editable.
    pub fn tap_token(&mut self, index: usize) -> Events<D> {
        if self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        match self.collection.id_at(index) {
            Some(id) => {
                let mut events = Vec::new();
                events.push(FieldEvent::TapToken { id, index });
                events
            }
            None => Vec::new(),
        }
    }

    /// A chip was double-tapped. Routed only while the field is editable.
    pub fn double_tap_token(&mut self, index: usize) -> Events<D> {
        if !self.flags.contains(FieldFlags::EDITABLE) {
            return Vec::new();
        }
        match self.collection.id_at(index) {
            Some(id) => {
                let mut events = Vec::new();
                events.push(FieldEvent::DoubleTapToken { id, index });
                events
            }
            None => Vec::new(),
        }
    }

    /// The field background (no chip) was tapped.
    pub fn tap_background(&mut self) -> Events<D> {
        let mut events = Vec::new();
        events.push(FieldEvent::TapBackground);
        events
    }

    // --- internals ---

    /// Append an accepted token, clear the fragment, and relayout.
    fn accept_token(&mut self, token: Token<D>, events: &mut Events<D>) -> TokenId {
        let (id, index) = self.collection.push(token);
        self.fragment.clear();
        events.push(FieldEvent::TokenAdded { id, index });
        events.push(FieldEvent::TextChanged(String::new()));
        events.extend(self.relayout());
        id
    }

    fn summary_text(&self) -> String {
        let mut out = String::new();
        for (i, label) in self.collection.labels().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            out.push_str(label);
        }
        out
    }

    /// Recompute the arrangement for the current state. Returns a height
    /// change event when the total differs from the last reported value.
    fn relayout(&mut self) -> Option<FieldEvent<D>> {
        let mode = self.mode();
        let label_width = match &self.field_label {
            Some(label) => self.measure.text_width(label),
            None => 0.0,
        };
        let params = ArrangeParams {
            available_width: self.available_width,
            metrics: &self.metrics,
            label_width,
            text_slot: mode == Mode::Editing,
        };
        self.arrangement = match mode {
            Mode::Collapsed => {
                let summary = self.summary_text();
                arrange_collapsed(self.measure.text_width(&summary), &params)
            }
            Mode::Editing | Mode::StaticDisplay => {
                let chips: Vec<Size> = self
                    .collection
                    .labels()
                    .map(|label| self.measure.chip_size(label))
                    .collect();
                arrange(&chips, &params)
            }
        };
        let height = self.arrangement.total_height;
        if self.reported_height == Some(height) {
            return None;
        }
        self.reported_height = Some(height);
        Some(FieldEvent::HeightChanged(height))
    }
}
