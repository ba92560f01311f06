//! Declarative draw operations for the report template.
//!
//! [`build_ops`] is a pure function from field values plus the set of
//! sections that have a decoded photo to the ordered list of operations the
//! PDF executor replays. Identical inputs always produce identical op lists,
//! which is what the idempotence tests pin down.

use std::collections::BTreeSet;

use gudang_core::models::{CreateLoaderRequest, LoaderRequest};

use crate::layout;
use crate::metrics::{text_width_mm, FontStyle};

/// RGB color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};
pub const DARK_BLUE: Color = Color { r: 0, g: 0, b: 128 };
pub const YELLOW: Color = Color {
    r: 255,
    g: 255,
    b: 0,
};

/// Horizontal anchoring of a text op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One drawing operation in top-left-origin page space (mm).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        size: f32,
        style: FontStyle,
        color: Color,
        x: f32,
        y: f32,
        align: Align,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    /// Embed the decoded photo for `section` inside the given bounds. The
    /// executor resolves the section to pixels; the op list itself stays
    /// comparable.
    Image {
        section: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// The field values the template renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFields {
    pub shipper_name: String,
    pub receipt_date: String,
    pub no_document: String,
    pub transaction: String,
    pub vehicle_no: String,
    pub container_no: String,
    pub warehouse_name: String,
}

impl From<&LoaderRequest> for ReportFields {
    fn from(r: &LoaderRequest) -> Self {
        ReportFields {
            shipper_name: r.shipper_name.clone(),
            receipt_date: r.receipt_date.clone(),
            no_document: r.no_document.clone(),
            transaction: r.transaction.to_string(),
            vehicle_no: r.vehicle_no.clone(),
            container_no: r.container_no.clone(),
            warehouse_name: r.warehouse_name.clone(),
        }
    }
}

impl From<&CreateLoaderRequest> for ReportFields {
    fn from(r: &CreateLoaderRequest) -> Self {
        ReportFields {
            shipper_name: r.shipper_name.clone(),
            receipt_date: r.receipt_date.clone(),
            no_document: r.no_document.clone(),
            transaction: r.transaction.to_string(),
            vehicle_no: r.vehicle_no.clone(),
            container_no: r.container_no.clone(),
            warehouse_name: r.warehouse_name.clone(),
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Summary row values with their literal placeholder substitutions.
///
/// Receipt Date and Transaction always render their placeholder words in the
/// summary blocks; the other rows substitute only when the field is empty.
fn summary_values(fields: &ReportFields) -> [String; 7] {
    [
        or_placeholder(&fields.shipper_name, "Input").to_string(),
        "(Today)".to_string(),
        or_placeholder(&fields.no_document, "Input").to_string(),
        "Choose".to_string(),
        or_placeholder(&fields.vehicle_no, "Input").to_string(),
        or_placeholder(&fields.container_no, "Input").to_string(),
        or_placeholder(&fields.warehouse_name, "Input").to_string(),
    ]
}

fn text(text: impl Into<String>, size: f32, style: FontStyle, color: Color, x: f32, y: f32) -> DrawOp {
    DrawOp::Text {
        text: text.into(),
        size,
        style,
        color,
        x,
        y,
        align: Align::Left,
    }
}

/// Build the full op list for one report.
///
/// `photo_sections` is the set of section names for which a decoded photo is
/// available; every other cell renders as caption plus empty bordered box.
pub fn build_ops(fields: &ReportFields, photo_sections: &BTreeSet<String>) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    // Logo placeholder mark and company name
    ops.push(DrawOp::FillCircle {
        cx: layout::LOGO_CENTER_X,
        cy: layout::LOGO_CENTER_Y,
        radius: layout::LOGO_RADIUS,
        color: DARK_BLUE,
    });
    ops.push(text(
        layout::LOGO_MARK,
        layout::LOGO_MARK_SIZE,
        FontStyle::Bold,
        WHITE,
        layout::LOGO_MARK_X,
        layout::LOGO_MARK_Y,
    ));
    ops.push(text(
        layout::COMPANY_NAME,
        layout::COMPANY_NAME_SIZE,
        FontStyle::Regular,
        BLACK,
        layout::COMPANY_NAME_X,
        layout::COMPANY_NAME_Y,
    ));

    // Title: measure the three segments, centre the whole, then draw them at
    // advancing offsets with the transaction segment highlighted.
    let prefix_width = text_width_mm(layout::TITLE_PREFIX, layout::TITLE_SIZE, FontStyle::Bold);
    let transaction_width =
        text_width_mm(&fields.transaction, layout::TITLE_SIZE, FontStyle::Bold);
    let full_width = prefix_width
        + transaction_width
        + text_width_mm(layout::TITLE_SUFFIX, layout::TITLE_SIZE, FontStyle::Bold);
    let start_x = layout::CENTER_X - full_width / 2.0;
    let transaction_x = start_x + prefix_width;

    ops.push(DrawOp::FillRect {
        x: transaction_x - layout::TITLE_HIGHLIGHT_PAD_X,
        y: layout::TITLE_Y - layout::TITLE_HIGHLIGHT_RISE,
        width: transaction_width + layout::TITLE_HIGHLIGHT_PAD_W,
        height: layout::TITLE_HIGHLIGHT_HEIGHT,
        color: YELLOW,
    });
    ops.push(text(
        layout::TITLE_PREFIX,
        layout::TITLE_SIZE,
        FontStyle::Bold,
        DARK_BLUE,
        start_x,
        layout::TITLE_Y,
    ));
    ops.push(text(
        &fields.transaction,
        layout::TITLE_SIZE,
        FontStyle::Bold,
        DARK_BLUE,
        transaction_x,
        layout::TITLE_Y,
    ));
    ops.push(text(
        layout::TITLE_SUFFIX,
        layout::TITLE_SIZE,
        FontStyle::Bold,
        DARK_BLUE,
        transaction_x + transaction_width,
        layout::TITLE_Y,
    ));

    // Left key/value column
    let left_rows = [
        ("Shipper Name", fields.shipper_name.as_str()),
        ("Receipt Date", fields.receipt_date.as_str()),
        ("No Document", fields.no_document.as_str()),
    ];
    for ((label, value), y) in left_rows.iter().zip(layout::KV_ROW_YS) {
        ops.push(text(*label, layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_LEFT_LABEL_X, y));
        ops.push(text(":", layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_LEFT_COLON_X, y));
        ops.push(text(*value, layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_LEFT_VALUE_X, y));
    }

    // Right key/value column; the transaction value carries its own
    // independent highlight.
    let transaction_row_y = layout::KV_ROW_YS[0];
    ops.push(text("Transaction", layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_LABEL_X, transaction_row_y));
    ops.push(text(":", layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_COLON_X, transaction_row_y));
    let value_width = text_width_mm(&fields.transaction, layout::KV_SIZE, FontStyle::Regular);
    ops.push(DrawOp::FillRect {
        x: layout::KV_RIGHT_VALUE_X - layout::TITLE_HIGHLIGHT_PAD_X,
        y: transaction_row_y - layout::KV_HIGHLIGHT_RISE,
        width: value_width + layout::TITLE_HIGHLIGHT_PAD_W,
        height: layout::KV_HIGHLIGHT_HEIGHT,
        color: YELLOW,
    });
    ops.push(text(&fields.transaction, layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_VALUE_X, transaction_row_y));

    let right_rows = [
        ("Vehicle No", fields.vehicle_no.as_str(), layout::KV_ROW_YS[1]),
        ("Container No", fields.container_no.as_str(), layout::KV_ROW_YS[2]),
    ];
    for (label, value, y) in right_rows {
        ops.push(text(label, layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_LABEL_X, y));
        ops.push(text(":", layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_COLON_X, y));
        ops.push(text(value, layout::KV_SIZE, FontStyle::Regular, BLACK, layout::KV_RIGHT_VALUE_X, y));
    }

    // Compact right-column summary
    for (i, (label, value)) in layout::SUMMARY_LABELS
        .iter()
        .zip(summary_values(fields))
        .enumerate()
    {
        let y = layout::SIDE_SUMMARY_START_Y + i as f32 * layout::SIDE_SUMMARY_STEP_Y;
        ops.push(text(*label, layout::SIDE_SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SIDE_SUMMARY_LABEL_X, y));
        ops.push(text(":", layout::SIDE_SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SIDE_SUMMARY_COLON_X, y));
        ops.push(text(value, layout::SIDE_SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SIDE_SUMMARY_VALUE_X, y));
    }

    // Rule between header block and photo grid
    ops.push(DrawOp::Line {
        x1: layout::RULE_X1,
        y1: layout::RULE_Y,
        x2: layout::RULE_X2,
        y2: layout::RULE_Y,
        width: layout::RULE_WIDTH,
    });

    // Photo grid: caption, border, and the photo when one was fetched
    for cell in layout::PHOTO_GRID.iter() {
        ops.push(text(
            cell.section,
            layout::CAPTION_SIZE,
            FontStyle::Regular,
            BLACK,
            cell.x,
            cell.y - layout::CAPTION_RISE,
        ));
        ops.push(DrawOp::StrokeRect {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
        });
        if photo_sections.contains(cell.section) {
            ops.push(DrawOp::Image {
                section: cell.section.to_string(),
                x: cell.x + layout::PHOTO_INSET,
                y: cell.y + layout::PHOTO_INSET,
                width: cell.width - 2.0 * layout::PHOTO_INSET,
                height: cell.height - 2.0 * layout::PHOTO_INSET,
            });
        }
    }

    // Lower summary list
    for (i, (label, value)) in layout::SUMMARY_LABELS
        .iter()
        .zip(summary_values(fields))
        .enumerate()
    {
        let y = layout::SUMMARY_START_Y + i as f32 * layout::SUMMARY_STEP_Y;
        ops.push(text(*label, layout::SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SUMMARY_LABEL_X, y));
        ops.push(text(":", layout::SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SUMMARY_COLON_X, y));
        ops.push(text(value, layout::SUMMARY_SIZE, FontStyle::Regular, BLACK, layout::SUMMARY_VALUE_X, y));
    }

    // Footer
    ops.push(DrawOp::Text {
        text: layout::FOOTER_LABEL.to_string(),
        size: layout::FOOTER_SIZE,
        style: FontStyle::Regular,
        color: BLACK,
        x: layout::CENTER_X,
        y: layout::FOOTER_LABEL_Y,
        align: Align::Center,
    });
    ops.push(DrawOp::Text {
        text: fields.warehouse_name.clone(),
        size: layout::FOOTER_SIZE,
        style: FontStyle::Regular,
        color: BLACK,
        x: layout::CENTER_X,
        y: layout::FOOTER_VALUE_Y,
        align: Align::Center,
    });

    ops
}
