//! Font metrics for the standard Helvetica faces, used to align text in cells.

use crate::layout::FontStyle;

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Advance width used for characters outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica advance widths for `' '..='~'`, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// `Helvetica-Bold` advance widths for `' '..='~'`, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(style: FontStyle, c: char) -> u16 {
    let table = match style {
        // Oblique shares the upright metrics.
        FontStyle::Regular | FontStyle::Italic => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };

    u32::from(c)
        .checked_sub(32)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| table.get(idx))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in millimetres when set in `style` at `size` points.
pub fn text_width_mm(text: &str, style: FontStyle, size: f32) -> f32 {
    let em_thousandths: f32 = text.chars().map(|c| f32::from(glyph_width(style, c))).sum();

    em_thousandths / 1000.0 * size * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_digits_match_regular_digits() {
        let regular = text_width_mm("350.00", FontStyle::Regular, 12.0);
        let bold = text_width_mm("350.00", FontStyle::Bold, 12.0);

        assert!((regular - bold).abs() < f32::EPSILON);
    }

    #[test]
    fn bold_text_is_wider() {
        let regular = text_width_mm("Total", FontStyle::Regular, 12.0);
        let bold = text_width_mm("Total", FontStyle::Bold, 12.0);

        assert!(bold > regular);
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width_mm("Coconut", FontStyle::Regular, 10.0);
        let large = text_width_mm("Coconut", FontStyle::Regular, 20.0);

        assert!((large - 2.0 * small).abs() < 0.001);
    }

    #[test]
    fn unknown_characters_use_fallback_width() {
        let width = text_width_mm("\u{20b9}", FontStyle::Regular, 1000.0 / MM_PER_PT);

        assert!((width - 556.0).abs() < 0.01);
    }
}
