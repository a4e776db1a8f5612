// Copyright 2026 the Tokenfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement seam and the per-line style constants.

use kurbo::Size;

/// Host-supplied measurement provider.
///
/// The layout algorithm never touches fonts. The embedding toolkit implements
/// this trait with its own text machinery and hands it to the control; the
/// same provider must be used for chips and for plain text so label offsets
/// and summary widths stay consistent.
///
/// Both methods are expected to be cheap — they are called for every token on
/// every relayout.
pub trait Measure {
    /// Width of `text` rendered in the field's text style.
    fn text_width(&self, text: &str) -> f64;

    /// Size of the chip rendering the given token label.
    ///
    /// This is the full chip footprint: label width plus whatever internal
    /// padding and decoration the chip style adds.
    fn chip_size(&self, label: &str) -> Size;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn text_width(&self, text: &str) -> f64 {
        (**self).text_width(text)
    }

    fn chip_size(&self, label: &str) -> Size {
        (**self).chip_size(label)
    }
}

/// Per-line geometry constants, supplied by the host as passive style input.
///
/// All values are in the same units as the measured chip sizes (typically
/// logical pixels or points).
#[derive(Clone, Debug, PartialEq)]
pub struct StyleMetrics {
    /// Height of one line of the field.
    pub row_height: f64,
    /// Padding above the first line.
    pub padding_top: f64,
    /// Padding below the last line.
    pub padding_bottom: f64,
    /// Left inset of every line.
    pub padding_left: f64,
    /// Right inset of every line.
    pub padding_right: f64,
    /// Horizontal gap between adjacent chips on a line.
    ///
    /// Defaults to zero: chip sizes are expected to include their own
    /// horizontal padding.
    pub token_spacing: f64,
    /// Gap between the field label and the first chip.
    pub label_gap: f64,
    /// Gap between the last chip on a line and the text-entry slot.
    pub text_slot_leading: f64,
    /// Minimum usable width for the text-entry slot. A narrower remainder
    /// pushes the slot onto its own line.
    pub text_slot_min_width: f64,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            row_height: 25.0,
            padding_top: 10.0,
            padding_bottom: 10.0,
            padding_left: 8.0,
            padding_right: 16.0,
            token_spacing: 0.0,
            label_gap: 4.0,
            text_slot_leading: 4.0,
            text_slot_min_width: 56.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_positive_where_required() {
        let m = StyleMetrics::default();
        assert!(m.row_height > 0.0, "row height must be positive");
        assert!(m.text_slot_min_width > 0.0, "slot minimum must be positive");
    }

    struct Mono;
    impl Measure for Mono {
        fn text_width(&self, text: &str) -> f64 {
            text.chars().count() as f64 * 8.0
        }
        fn chip_size(&self, label: &str) -> Size {
            Size::new(self.text_width(label) + 12.0, 20.0)
        }
    }

    #[test]
    fn measure_is_usable_through_references() {
        fn width(m: impl Measure, s: &str) -> f64 {
            m.text_width(s)
        }
        let mono = Mono;
        assert_eq!(width(&mono, "ab"), 16.0);
        assert_eq!((&mono).chip_size("ab").width, 28.0);
    }
}
