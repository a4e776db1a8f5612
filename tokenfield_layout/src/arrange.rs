// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line-fill arrangement over measured chip sizes.
//!
//! ## Overview
//!
//! [`arrange`] walks chips in display order with a running horizontal cursor,
//! wrapping to a new line when the next chip would cross the right edge of a
//! non-empty line, then reserves the trailing text-entry slot. Output is plain
//! world-space geometry relative to the field's top-left corner.
//!
//! [`arrange_collapsed`] is the single-line summary variant used when the
//! field is collapsed: no per-token wrapping happens at all.
//!
//! Both functions are pure; callers decide when a recompute is needed.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::metrics::StyleMetrics;

/// Inputs to [`arrange`] and [`arrange_collapsed`] beyond the chips
/// themselves.
#[derive(Clone, Debug)]
pub struct ArrangeParams<'a> {
    /// Full content width available to the field.
    pub available_width: f64,
    /// Style constants.
    pub metrics: &'a StyleMetrics,
    /// Measured width of the leading field label (e.g. `"To:"`), or `0.0`
    /// when there is none. The label occupies the start of the first line.
    pub label_width: f64,
    /// Reserve a trailing text-entry slot (editing mode).
    pub text_slot: bool,
}

/// One placed chip: the token's display index and its rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Display index of the token in the collection.
    pub index: usize,
    /// Chip rectangle, relative to the field's top-left corner.
    pub rect: Rect,
}

/// One line of the arrangement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    /// Chips on this line, left to right.
    pub tokens: Vec<Placement>,
}

impl Line {
    /// Display indices of the tokens on this line, left to right.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().map(|p| p.index)
    }
}

/// A computed line-by-line arrangement.
///
/// Exactly one of two shapes:
/// - expanded: every token appears in exactly one of `lines`, and
///   `text_slot` is populated when a slot was requested;
/// - collapsed: `lines` is empty and `summary` holds the single synthetic
///   summary line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arrangement {
    /// Lines of placed chips, top to bottom. A line can only be empty when a
    /// field label occupies it alone (everything after it wrapped).
    pub lines: Vec<Line>,
    /// Rectangle reserved for the host's text-entry primitive.
    pub text_slot: Option<Rect>,
    /// Rectangle of the collapsed summary text. Mutually exclusive with
    /// `lines`.
    pub summary: Option<Rect>,
    /// Rectangle of the leading field label, when present.
    pub label: Option<Rect>,
    /// Number of rows the field occupies (at least 1).
    pub line_count: usize,
    /// Total field height: paddings plus `line_count` rows.
    pub total_height: f64,
}

impl Arrangement {
    /// Display index of the token whose chip contains `pt`, if any.
    pub fn token_at(&self, pt: Point) -> Option<usize> {
        self.placements()
            .find(|p| p.rect.contains(pt))
            .map(|p| p.index)
    }

    /// Iterate all placements in display order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.lines.iter().flat_map(|l| l.tokens.iter())
    }

    /// Left edge of the text-entry slot, when one is reserved.
    ///
    /// Hosts use this to position their native text primitive inside the
    /// field.
    pub fn text_slot_offset(&self) -> Option<f64> {
        self.text_slot.map(|r| r.x0)
    }
}

fn label_rect(params: &ArrangeParams<'_>) -> Option<Rect> {
    (params.label_width > 0.0).then(|| {
        let m = params.metrics;
        Rect::new(
            m.padding_left,
            m.padding_top,
            m.padding_left + params.label_width,
            m.padding_top + m.row_height,
        )
    })
}

/// Arrange chips into greedily filled lines.
///
/// Walks `chips` in order; each chip either extends the current line or, when
/// it would cross the right edge of an already-occupied line, starts a new
/// one. A chip wider than the whole line is placed alone and may overflow —
/// it is never truncated or split. When `params.text_slot` is set, a
/// text-entry slot is reserved after the last chip, moving to its own line if
/// the remainder is narrower than [`StyleMetrics::text_slot_min_width`].
pub fn arrange(chips: &[Size], params: &ArrangeParams<'_>) -> Arrangement {
    let m = params.metrics;
    let right_edge = params.available_width - m.padding_right;
    let label = label_rect(params);

    let mut lines: Vec<Line> = Vec::new();
    let mut line = Line::default();
    let mut line_index = 0_usize;
    // The label counts as occupying the first line: a chip that does not fit
    // after it wraps rather than overflowing.
    let mut occupied = label.is_some();
    let mut cursor = match label {
        Some(r) => r.x1 + m.label_gap,
        None => m.padding_left,
    };

    for (index, chip) in chips.iter().enumerate() {
        if occupied && cursor + chip.width > right_edge {
            lines.push(core::mem::take(&mut line));
            line_index += 1;
            cursor = m.padding_left;
            occupied = false;
        }
        let y = m.padding_top + line_index as f64 * m.row_height;
        line.tokens.push(Placement {
            index,
            rect: Rect::new(cursor, y, cursor + chip.width, y + chip.height),
        });
        cursor += chip.width + m.token_spacing;
        occupied = true;
    }
    if !line.tokens.is_empty() {
        lines.push(line);
    }

    let mut line_count = line_index + 1;
    let text_slot = params.text_slot.then(|| {
        let mut slot_line = line_index;
        let mut x = if occupied {
            cursor + m.text_slot_leading
        } else {
            cursor
        };
        if occupied && right_edge - x < m.text_slot_min_width {
            slot_line += 1;
            x = m.padding_left;
        }
        line_count = line_count.max(slot_line + 1);
        // The slot keeps its minimum width even when the line cannot provide
        // it; the host's text primitive may visually overflow, mirroring the
        // oversized-chip rule.
        let width = (right_edge - x).max(m.text_slot_min_width);
        let y = m.padding_top + slot_line as f64 * m.row_height;
        Rect::new(x, y, x + width, y + m.row_height)
    });

    Arrangement {
        lines,
        text_slot,
        summary: None,
        label,
        line_count,
        total_height: m.padding_top + m.padding_bottom + line_count as f64 * m.row_height,
    }
}

/// Arrange a collapsed field: one synthetic summary line.
///
/// `summary_width` is the measured width of the joined-label summary text.
/// The summary is clipped to the available width rather than wrapped; the
/// field height is always exactly one row plus paddings, no matter how many
/// tokens the summary describes.
pub fn arrange_collapsed(summary_width: f64, params: &ArrangeParams<'_>) -> Arrangement {
    let m = params.metrics;
    let right_edge = params.available_width - m.padding_right;
    let label = label_rect(params);

    let x0 = match label {
        Some(r) => r.x1 + m.label_gap,
        None => m.padding_left,
    };
    let x1 = (x0 + summary_width).min(right_edge).max(x0);
    let summary = Rect::new(x0, m.padding_top, x1, m.padding_top + m.row_height);

    Arrangement {
        lines: Vec::new(),
        text_slot: None,
        summary: Some(summary),
        label,
        line_count: 1,
        total_height: m.padding_top + m.padding_bottom + m.row_height,
    }
}
