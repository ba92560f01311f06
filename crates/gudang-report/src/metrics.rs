//! Helvetica font metrics.
//!
//! Character advance widths for the two builtin fonts the template uses,
//! in 1/1000 em units from the Adobe AFM files. Needed to centre the title
//! and size the highlight rectangles before anything is drawn.

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Font style used by the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Helvetica advance widths for chars 0x20..=0x7e.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths for chars 0x20..=0x7e.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // sp..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // 'a'..'p'
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'q'..'z'
    389, 280, 389, 584, // '{'..'~'
];

fn char_width_units(c: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA_WIDTHS,
        FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    let code = c as u32;
    if (0x20..=0x7e).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        // Non-ASCII falls back to the average lowercase width; the template
        // only renders ASCII field values in practice.
        556
    }
}

/// Rendered width of `text` in millimetres at the given point size.
pub fn text_width_mm(text: &str, size_pt: f32, style: FontStyle) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| u32::from(char_width_units(c, style)))
        .sum();
    (units as f32 / 1000.0) * size_pt * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(text_width_mm("", 14.0, FontStyle::Bold), 0.0);
    }

    #[test]
    fn test_width_scales_linearly_with_size() {
        let w10 = text_width_mm("Outbound", 10.0, FontStyle::Regular);
        let w20 = text_width_mm("Outbound", 20.0, FontStyle::Regular);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let regular = text_width_mm("Inbound", 12.0, FontStyle::Regular);
        let bold = text_width_mm("Inbound", 12.0, FontStyle::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn test_segment_widths_sum_to_whole() {
        let prefix = text_width_mm("Report Documentation Warehouse ", 14.0, FontStyle::Bold);
        let middle = text_width_mm("Outbound", 14.0, FontStyle::Bold);
        let suffix = text_width_mm(" Activity", 14.0, FontStyle::Bold);
        let whole = text_width_mm(
            "Report Documentation Warehouse Outbound Activity",
            14.0,
            FontStyle::Bold,
        );
        assert!((prefix + middle + suffix - whole).abs() < 1e-3);
    }
}
