// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the control: modes, flags, events, and the tokenizer seam.

use alloc::string::String;
use alloc::vec::Vec;

use tokenfield_collection::{Token, TokenId};

/// Display/input mode of the field.
///
/// Derived from the host configuration ([`FieldFlags`]) and the current focus
/// state; see [`TokenField::mode`](crate::field::TokenField::mode). The mode
/// is never stored directly, so the two reachability invariants hold by
/// construction: `StaticDisplay` only while the field is not editable, and
/// `Collapsed` only while collapsing is enabled and focus is elsewhere.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Multi-line arrangement with a trailing text-entry slot. Also the
    /// visual mode of an editable, non-collapsible field that is not focused.
    Editing,
    /// Single summary line; reached when the field is collapsible and not
    /// focused.
    Collapsed,
    /// Read-only multi-line arrangement; reached only via the host clearing
    /// [`FieldFlags::EDITABLE`]. User-gesture mutation paths are disabled,
    /// host-driven mutation still works.
    StaticDisplay,
}

bitflags::bitflags! {
    /// Host-configured behavior bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// The user may add and remove tokens. When clear, the field is a
        /// read-only display and only host-driven mutation is honored.
        const EDITABLE    = 0b0000_0001;
        /// The field collapses to a one-line summary when it loses focus.
        const COLLAPSIBLE = 0b0000_0010;
    }
}

impl Default for FieldFlags {
    fn default() -> Self {
        Self::EDITABLE
    }
}

/// A notification to the host.
///
/// Mutating operations on [`TokenField`](crate::field::TokenField) return the
/// ordered sequence of events they produced. Events are built after all
/// internal state has settled, so a host reacting to one (including by
/// mutating the field again) always observes a consistent field.
///
/// Feed a sequence to [`Handlers`](crate::handlers::Handlers) to dispatch it
/// across optional per-event callbacks, or match on it directly.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent<D> {
    /// A token was appended at `index`.
    TokenAdded {
        /// Handle of the new token.
        id: TokenId,
        /// Display index it was placed at.
        index: usize,
    },
    /// A token was removed. Carries the token by value; the collection no
    /// longer owns it.
    TokenRemoved {
        /// The removed token.
        token: Token<D>,
        /// Display index it occupied before removal.
        index: usize,
    },
    /// The field's total height changed. Emitted at most once per operation,
    /// and only when the value actually differs from the last reported one.
    HeightChanged(f64),
    /// The in-progress fragment changed; pass-through for autocomplete UIs.
    TextChanged(String),
    /// A token chip was tapped (non-editable fields only).
    TapToken {
        /// Handle of the tapped token.
        id: TokenId,
        /// Its display index.
        index: usize,
    },
    /// A token chip was double-tapped (editable fields only).
    DoubleTapToken {
        /// Handle of the tapped token.
        id: TokenId,
        /// Its display index.
        index: usize,
    },
    /// The field background (not a chip) was tapped.
    TapBackground,
    /// The field gained focus and entered editing.
    BeginEditing,
    /// The field lost focus.
    EndEditing,
}

/// Ordered event sequence returned by mutating operations.
pub type Events<D> = Vec<FieldEvent<D>>;

/// Result of a confirm action ("Return" in most hosts).
///
/// `consumed` is the value the host should hand back to its text primitive:
/// `true` swallows the key, `false` lets the host treat it as a bare submit
/// (close the field, move focus, send the message — its call).
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmOutcome<D> {
    /// Whether the action was consumed by the field.
    pub consumed: bool,
    /// Events produced while handling the action.
    pub events: Events<D>,
}

/// Convert free text into a token.
///
/// Implemented by the host, typically against a candidate list resolved ahead
/// of time (the control assumes the hook is synchronous and fast; there is no
/// pending-tokenization state). Returning `None` is a policy outcome, not an
/// error: the fragment stays as typed.
pub trait Tokenizer<D> {
    /// Try to convert `fragment` into a token.
    fn try_tokenize(&mut self, fragment: &str) -> Option<Token<D>>;
}

/// A tokenizer that never matches, used when a host adds tokens only
/// programmatically.
///
/// All calls to [`Tokenizer::try_tokenize`] return `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTokenizer;

impl<D> Tokenizer<D> for NoTokenizer {
    #[inline]
    fn try_tokenize(&mut self, _fragment: &str) -> Option<Token<D>> {
        None
    }
}
