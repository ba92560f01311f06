//! Page layout for the warehouse report.
//!
//! Single fixed A4 portrait template, millimetre coordinates with the origin
//! at the top-left (flipped to PDF space by the executor). All positions are
//! data here; the op builder consumes them and never hard-codes a
//! coordinate of its own.

/// A4 portrait, millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Horizontal centre of the page.
pub const CENTER_X: f32 = 105.0;

// Header ------------------------------------------------------------------

pub const LOGO_CENTER_X: f32 = 20.0;
pub const LOGO_CENTER_Y: f32 = 20.0;
pub const LOGO_RADIUS: f32 = 7.0;
pub const LOGO_MARK: &str = "D";
pub const LOGO_MARK_X: f32 = 18.0;
pub const LOGO_MARK_Y: f32 = 23.0;
pub const LOGO_MARK_SIZE: f32 = 12.0;

pub const COMPANY_NAME: &str = "PT. DUNIA KIMIA JAYA";
pub const COMPANY_NAME_X: f32 = 32.0;
pub const COMPANY_NAME_Y: f32 = 20.0;
pub const COMPANY_NAME_SIZE: f32 = 10.0;

/// Title: three segments centred as one unit; the middle segment (the
/// transaction value) is drawn over a highlight.
pub const TITLE_PREFIX: &str = "Report Documentation Warehouse ";
pub const TITLE_SUFFIX: &str = " Activity";
pub const TITLE_Y: f32 = 30.0;
pub const TITLE_SIZE: f32 = 14.0;
/// Highlight extends 1mm left of the text and 2mm beyond its width.
pub const TITLE_HIGHLIGHT_PAD_X: f32 = 1.0;
pub const TITLE_HIGHLIGHT_PAD_W: f32 = 2.0;
pub const TITLE_HIGHLIGHT_RISE: f32 = 10.0;
pub const TITLE_HIGHLIGHT_HEIGHT: f32 = 12.0;

// Key/value block ----------------------------------------------------------

pub const KV_SIZE: f32 = 10.0;
pub const KV_LEFT_LABEL_X: f32 = 15.0;
pub const KV_LEFT_COLON_X: f32 = 50.0;
pub const KV_LEFT_VALUE_X: f32 = 55.0;
pub const KV_RIGHT_LABEL_X: f32 = 120.0;
pub const KV_RIGHT_COLON_X: f32 = 155.0;
pub const KV_RIGHT_VALUE_X: f32 = 160.0;
pub const KV_ROW_YS: [f32; 3] = [45.0, 52.0, 59.0];
pub const KV_HIGHLIGHT_RISE: f32 = 5.0;
pub const KV_HIGHLIGHT_HEIGHT: f32 = 7.0;

// Compact right-column summary --------------------------------------------

pub const SIDE_SUMMARY_SIZE: f32 = 8.0;
pub const SIDE_SUMMARY_LABEL_X: f32 = 120.0;
pub const SIDE_SUMMARY_COLON_X: f32 = 155.0;
pub const SIDE_SUMMARY_VALUE_X: f32 = 160.0;
pub const SIDE_SUMMARY_START_Y: f32 = 80.0;
pub const SIDE_SUMMARY_STEP_Y: f32 = 5.0;

// Separator rule -----------------------------------------------------------

pub const RULE_Y: f32 = 70.0;
pub const RULE_X1: f32 = 15.0;
pub const RULE_X2: f32 = 195.0;
pub const RULE_WIDTH: f32 = 0.5;

// Photo grid ---------------------------------------------------------------

pub const CAPTION_SIZE: f32 = 6.0;
/// Captions sit 1mm above the cell border.
pub const CAPTION_RISE: f32 = 1.0;
/// Photos are inset this much inside the cell border on every side.
pub const PHOTO_INSET: f32 = 0.5;

/// One photo cell: section name and bounds in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDescriptor {
    pub section: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

const fn cell(section: &'static str, x: f32, y: f32) -> CellDescriptor {
    CellDescriptor {
        section,
        x,
        y,
        width: 40.0,
        height: 30.0,
    }
}

/// The 16 cells, 4 columns x 4 rows, in section order.
pub const PHOTO_GRID: [CellDescriptor; 16] = [
    // First row
    cell("foto tampak depan", 15.0, 75.0),
    cell("depan sisi kiri", 60.0, 75.0),
    cell("depan sisi kanan", 105.0, 75.0),
    cell("segel", 150.0, 75.0),
    // Second row
    cell("foto tampak belakang sebelum dibuka", 15.0, 110.0),
    cell("sampling kanan", 60.0, 110.0),
    cell("sampling kiri", 105.0, 110.0),
    cell("foto tampak belakang sebelum muat", 150.0, 110.0),
    // Third row
    cell("foto setelah muat", 15.0, 145.0),
    cell("Product 1", 60.0, 145.0),
    cell("Product 2", 105.0, 145.0),
    cell("Product 3", 150.0, 145.0),
    // Fourth row
    cell("Product 4", 15.0, 180.0),
    cell("Product 5", 60.0, 180.0),
    cell("Product 6", 105.0, 180.0),
    cell("Product 7", 150.0, 180.0),
];

// Lower summary list -------------------------------------------------------

pub const SUMMARY_SIZE: f32 = 10.0;
pub const SUMMARY_LABEL_X: f32 = 15.0;
pub const SUMMARY_COLON_X: f32 = 70.0;
pub const SUMMARY_VALUE_X: f32 = 75.0;
pub const SUMMARY_START_Y: f32 = 220.0;
pub const SUMMARY_STEP_Y: f32 = 7.0;

/// Labels of the 7 summary rows (both summary blocks share them).
pub const SUMMARY_LABELS: [&str; 7] = [
    "1. Shipper Name",
    "2. Receipt Date",
    "3. No Document",
    "4. Transaction",
    "5. Vehicle No",
    "6. Container No",
    "7. Warehouse Name",
];

// Footer -------------------------------------------------------------------

pub const FOOTER_LABEL: &str = "Warehouse Name";
pub const FOOTER_LABEL_Y: f32 = 280.0;
pub const FOOTER_VALUE_Y: f32 = 285.0;
pub const FOOTER_SIZE: f32 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_core::models::PHOTO_SECTIONS;

    #[test]
    fn test_grid_matches_section_order() {
        assert_eq!(PHOTO_GRID.len(), PHOTO_SECTIONS.len());
        for (cell, section) in PHOTO_GRID.iter().zip(PHOTO_SECTIONS.iter()) {
            assert_eq!(cell.section, *section);
        }
    }

    #[test]
    fn test_grid_is_four_by_four() {
        let xs = [15.0, 60.0, 105.0, 150.0];
        let ys = [75.0, 110.0, 145.0, 180.0];
        for (i, cell) in PHOTO_GRID.iter().enumerate() {
            assert_eq!(cell.x, xs[i % 4]);
            assert_eq!(cell.y, ys[i / 4]);
            assert_eq!(cell.width, 40.0);
            assert_eq!(cell.height, 30.0);
        }
    }

    #[test]
    fn test_grid_fits_on_page() {
        for cell in PHOTO_GRID.iter() {
            assert!(cell.x + cell.width <= PAGE_WIDTH_MM);
            assert!(cell.y + cell.height < SUMMARY_START_Y);
        }
    }
}
