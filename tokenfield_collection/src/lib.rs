// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tokenfield_collection --heading-base-level=0

//! Tokenfield Collection: an ordered token list with stable identity handles.
//!
//! A token is one accepted entry in a token input field (for example one mail
//! recipient): a human-visible label plus an opaque host payload. This crate
//! holds the ordered sequence of tokens behind such a field and nothing else —
//! no layout, no input interpretation. Higher layers recompute an arrangement
//! whenever this collection changes.
//!
//! - Insertion order is display order.
//! - Duplicates are permitted; removal is by identity, not by label.
//! - [`TokenId`] handles are assigned on insertion and never reused, so two
//!   tokens with equal labels stay independently addressable.
//!
//! # Example
//!
//! ```rust
//! use tokenfield_collection::{Token, TokenCollection};
//!
//! let mut tokens: TokenCollection<u32> = TokenCollection::new();
//! let (a, _) = tokens.push(Token::new("alice@example.com", 1));
//! let (b, _) = tokens.push(Token::new("bob@example.com", 2));
//!
//! assert_eq!(tokens.index_of(b), Some(1));
//!
//! // Removal is a silent no-op once the handle is stale.
//! let removed = tokens.remove(a).unwrap();
//! assert_eq!(removed.0.label, "alice@example.com");
//! assert!(tokens.remove(a).is_none());
//! assert_eq!(tokens.index_of(b), Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier for a token in a [`TokenCollection`].
///
/// This is a small, copyable handle assigned by the collection on insertion.
/// Handles are monotonically increasing and never reused, so a stale handle
/// can never alias a different live token. Use
/// [`TokenCollection::index_of`] to check liveness and find the current
/// display position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TokenId(u64);

/// One accepted entry in a token field.
///
/// The `label` is the human-visible text (what a chip renders); `data` is an
/// opaque payload the host may attach (a contact record, an address, an id).
/// The core crates never inspect `data`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<D> {
    /// Human-visible label.
    pub label: String,
    /// Opaque host payload.
    pub data: D,
}

impl<D> Token<D> {
    /// Create a token from a label and a host payload.
    pub fn new(label: impl Into<String>, data: D) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry<D> {
    id: TokenId,
    token: Token<D>,
}

/// Ordered sequence of tokens.
///
/// Append with [`push`](Self::push), remove by identity with
/// [`remove`](Self::remove), and read through shared borrows. Indices are the
/// display positions and shift on removal; [`TokenId`]s are stable for the
/// token's whole lifetime.
#[derive(Clone, Debug)]
pub struct TokenCollection<D> {
    entries: Vec<Entry<D>>,
    next_id: u64,
}

impl<D> Default for TokenCollection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> TokenCollection<D> {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the collection holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a token at the end of the sequence.
    ///
    /// Always succeeds. Returns the assigned handle and the token's index
    /// (which is `len() - 1` after the call).
    pub fn push(&mut self, token: Token<D>) -> (TokenId, usize) {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, token });
        (id, self.entries.len() - 1)
    }

    /// Remove the token identified by `id`.
    ///
    /// Returns the removed token and the index it occupied, or `None` when the
    /// handle is stale. Later tokens shift down by one.
    pub fn remove(&mut self, id: TokenId) -> Option<(Token<D>, usize)> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        Some((entry.token, index))
    }

    /// Current display index of `id`, or `None` when the handle is stale.
    pub fn index_of(&self, id: TokenId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// The token identified by `id`, if live.
    pub fn get(&self, id: TokenId) -> Option<&Token<D>> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.token)
    }

    /// Handle of the token at display index `index`.
    pub fn id_at(&self, index: usize) -> Option<TokenId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Handle of the last token in display order.
    pub fn last_id(&self) -> Option<TokenId> {
        self.entries.last().map(|e| e.id)
    }

    /// Iterate tokens in display order as `(handle, token)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token<D>)> {
        self.entries.iter().map(|e| (e.id, &e.token))
    }

    /// Iterate labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.token.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn push_preserves_insertion_order() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        c.push(Token::new("a", ()));
        c.push(Token::new("b", ()));
        c.push(Token::new("c", ()));
        let labels: Vec<&str> = c.labels().collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn push_reports_end_index() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        let (_, i0) = c.push(Token::new("a", ()));
        let (_, i1) = c.push(Token::new("b", ()));
        assert_eq!((i0, i1), (0, 1));
    }

    // Two tokens with equal labels must be independently removable: removal
    // is by handle, never by label.
    #[test]
    fn duplicate_labels_are_distinct() {
        let mut c: TokenCollection<u8> = TokenCollection::new();
        let (first, _) = c.push(Token::new("dup", 1));
        let (second, _) = c.push(Token::new("dup", 2));
        assert_ne!(first, second);

        let (removed, index) = c.remove(first).unwrap();
        assert_eq!((removed.data, index), (1, 0));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(second).unwrap().data, 2);
    }

    #[test]
    fn remove_stale_handle_is_noop() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        let (id, _) = c.push(Token::new("a", ()));
        assert!(c.remove(id).is_some());
        assert!(c.remove(id).is_none());
        assert!(c.is_empty());
    }

    #[test]
    fn remove_shifts_later_indices() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        let (a, _) = c.push(Token::new("a", ()));
        let (b, _) = c.push(Token::new("b", ()));
        let (z, _) = c.push(Token::new("c", ()));
        let (_, index) = c.remove(b).unwrap();
        assert_eq!(index, 1);
        assert_eq!(c.index_of(a), Some(0));
        assert_eq!(c.index_of(z), Some(1));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        let (a, _) = c.push(Token::new("a", ()));
        c.remove(a);
        let (b, _) = c.push(Token::new("b", ()));
        assert_ne!(a, b);
        assert!(c.get(a).is_none());
    }

    #[test]
    fn last_id_and_id_at_agree() {
        let mut c: TokenCollection<()> = TokenCollection::new();
        c.push(Token::new("a", ()));
        let (b, _) = c.push(Token::new("b", ()));
        assert_eq!(c.last_id(), Some(b));
        assert_eq!(c.id_at(1), Some(b));
        assert_eq!(c.id_at(2), None);
    }
}
