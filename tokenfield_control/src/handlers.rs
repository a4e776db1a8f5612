// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional per-event handler slots and the dispatch loop over an event
//! sequence.
//!
//! ## Usage
//!
//! The field's mutating operations return [`Events`] rather than calling the
//! host back mid-mutation. [`Handlers`] is the convenience dispatcher for
//! hosts that prefer callback style: fill in the slots you care about and
//! [`deliver`](Handlers::deliver) each returned sequence. A missing slot
//! means "no notification delivered" — never an error.
//!
//! ```
//! use tokenfield_control::handlers::Handlers;
//! use tokenfield_control::types::FieldEvent;
//!
//! let mut heights: Vec<f64> = Vec::new();
//! let mut handlers: Handlers<'_, ()> = Handlers::new();
//! handlers.on_height_changed = Some(Box::new(|h| heights.push(h)));
//!
//! handlers.deliver(vec![
//!     FieldEvent::HeightChanged(45.0),
//!     FieldEvent::TapBackground, // no slot installed: silently dropped
//! ]);
//! drop(handlers);
//! assert_eq!(heights, vec![45.0]);
//! ```

use alloc::boxed::Box;

use tokenfield_collection::{Token, TokenId};

use crate::types::{Events, FieldEvent};

/// Host-supplied notification slots, each independently optional.
///
/// The lifetime `'h` lets slots borrow host state. Slots receive exactly the
/// payloads of the corresponding [`FieldEvent`] variants; removed tokens are
/// passed by value since the field no longer owns them.
pub struct Handlers<'h, D> {
    /// A token was appended.
    pub on_token_added: Option<Box<dyn FnMut(TokenId, usize) + 'h>>,
    /// A token was removed; receives it by value.
    pub on_token_removed: Option<Box<dyn FnMut(Token<D>, usize) + 'h>>,
    /// The field height changed.
    pub on_height_changed: Option<Box<dyn FnMut(f64) + 'h>>,
    /// The fragment text changed (autocomplete pass-through).
    pub on_text_changed: Option<Box<dyn FnMut(&str) + 'h>>,
    /// A chip was tapped (non-editable fields).
    pub on_tap_token: Option<Box<dyn FnMut(TokenId, usize) + 'h>>,
    /// A chip was double-tapped (editable fields).
    pub on_double_tap_token: Option<Box<dyn FnMut(TokenId, usize) + 'h>>,
    /// The background was tapped.
    pub on_tap_background: Option<Box<dyn FnMut() + 'h>>,
    /// Editing began.
    pub on_begin_editing: Option<Box<dyn FnMut() + 'h>>,
    /// Editing ended.
    pub on_end_editing: Option<Box<dyn FnMut() + 'h>>,
}

impl<D> core::fmt::Debug for Handlers<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_token_added", &self.on_token_added.is_some())
            .field("on_token_removed", &self.on_token_removed.is_some())
            .field("on_height_changed", &self.on_height_changed.is_some())
            .field("on_text_changed", &self.on_text_changed.is_some())
            .field("on_tap_token", &self.on_tap_token.is_some())
            .field("on_double_tap_token", &self.on_double_tap_token.is_some())
            .field("on_tap_background", &self.on_tap_background.is_some())
            .field("on_begin_editing", &self.on_begin_editing.is_some())
            .field("on_end_editing", &self.on_end_editing.is_some())
            .finish()
    }
}

impl<D> Default for Handlers<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h, D> Handlers<'h, D> {
    /// Create a handler set with every slot empty.
    pub fn new() -> Self {
        Self {
            on_token_added: None,
            on_token_removed: None,
            on_height_changed: None,
            on_text_changed: None,
            on_tap_token: None,
            on_double_tap_token: None,
            on_tap_background: None,
            on_begin_editing: None,
            on_end_editing: None,
        }
    }

    /// Dispatch an event sequence across the installed slots, in order.
    ///
    /// Events without a matching slot are dropped.
    pub fn deliver(&mut self, events: Events<D>) {
        for event in events {
            match event {
                FieldEvent::TokenAdded { id, index } => {
                    if let Some(f) = &mut self.on_token_added {
                        f(id, index);
                    }
                }
                FieldEvent::TokenRemoved { token, index } => {
                    if let Some(f) = &mut self.on_token_removed {
                        f(token, index);
                    }
                }
                FieldEvent::HeightChanged(height) => {
                    if let Some(f) = &mut self.on_height_changed {
                        f(height);
                    }
                }
                FieldEvent::TextChanged(text) => {
                    if let Some(f) = &mut self.on_text_changed {
                        f(&text);
                    }
                }
                FieldEvent::TapToken { id, index } => {
                    if let Some(f) = &mut self.on_tap_token {
                        f(id, index);
                    }
                }
                FieldEvent::DoubleTapToken { id, index } => {
                    if let Some(f) = &mut self.on_double_tap_token {
                        f(id, index);
                    }
                }
                FieldEvent::TapBackground => {
                    if let Some(f) = &mut self.on_tap_background {
                        f();
                    }
                }
                FieldEvent::BeginEditing => {
                    if let Some(f) = &mut self.on_begin_editing {
                        f();
                    }
                }
                FieldEvent::EndEditing => {
                    if let Some(f) = &mut self.on_end_editing {
                        f();
                    }
                }
            }
        }
    }
}
