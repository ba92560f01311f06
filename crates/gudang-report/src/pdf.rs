//! Replays a draw-op list into a PDF document.
//!
//! The only module that touches printpdf. Coordinates arrive in
//! top-left-origin page space and get flipped here; everything above this
//! layer stays pure and comparable.

use std::collections::BTreeMap;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    calculate_points_for_circle, calculate_points_for_rect, BuiltinFont, Color as PdfColor,
    ImageTransform, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};

use crate::error::RenderError;
use crate::fetch::DecodedPhoto;
use crate::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::metrics::{text_width_mm, FontStyle};
use crate::ops::{Align, Color, DrawOp};

const MM_PER_INCH: f32 = 25.4;
const PT_PER_MM: f32 = 72.0 / 25.4;
const IMAGE_DPI: f32 = 300.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

fn flip_y(y_top: f32) -> f32 {
    PAGE_HEIGHT_MM - y_top
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

fn draw_text(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    text: &str,
    size: f32,
    style: FontStyle,
    color: Color,
    x: f32,
    y: f32,
    align: Align,
) {
    let x = match align {
        Align::Left => x,
        Align::Center => x - text_width_mm(text, size, style) / 2.0,
    };
    layer.set_fill_color(pdf_color(color));
    layer.use_text(
        text,
        size.into(),
        Mm(x.into()),
        Mm(flip_y(y).into()),
        fonts.get(style),
    );
}

fn draw_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32, mode: PaintMode) {
    // calculate_points_for_rect positions by the rect centre
    let center_x = x + width / 2.0;
    let center_y = flip_y(y + height / 2.0);
    let points = calculate_points_for_rect(
        Mm(width.into()),
        Mm(height.into()),
        Mm(center_x.into()),
        Mm(center_y.into()),
    );
    layer.add_polygon(Polygon {
        rings: vec![points],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_image(
    layer: &PdfLayerReference,
    photo: &DecodedPhoto,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    let image = printpdf::Image::from_dynamic_image(&photo.image);
    // Natural size at the chosen dpi, scaled to fill the cell bounds
    let natural_width_mm = photo.width_px as f32 * MM_PER_INCH / IMAGE_DPI;
    let natural_height_mm = photo.height_px as f32 * MM_PER_INCH / IMAGE_DPI;
    let transform = ImageTransform {
        translate_x: Some(Mm(x.into())),
        translate_y: Some(Mm(flip_y(y + height).into())),
        scale_x: Some((width / natural_width_mm).into()),
        scale_y: Some((height / natural_height_mm).into()),
        dpi: Some(IMAGE_DPI.into()),
        ..Default::default()
    };
    image.add_to_layer(layer.clone(), transform);
}

/// Render the op list into PDF bytes.
pub fn render_ops(
    ops: &[DrawOp],
    photos: &BTreeMap<String, DecodedPhoto>,
) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        "Warehouse Report",
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    for op in ops {
        match op {
            DrawOp::Text {
                text,
                size,
                style,
                color,
                x,
                y,
                align,
            } => draw_text(&layer, &fonts, text, *size, *style, *color, *x, *y, *align),
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                layer.set_fill_color(pdf_color(*color));
                draw_rect(&layer, *x, *y, *width, *height, PaintMode::Fill);
            }
            DrawOp::StrokeRect {
                x,
                y,
                width,
                height,
            } => {
                layer.set_outline_color(pdf_color(crate::ops::BLACK));
                layer.set_outline_thickness((0.2 * PT_PER_MM).into());
                draw_rect(&layer, *x, *y, *width, *height, PaintMode::Stroke);
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
            } => {
                layer.set_outline_color(pdf_color(crate::ops::BLACK));
                layer.set_outline_thickness((width * PT_PER_MM).into());
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm((*x1).into()), Mm(flip_y(*y1).into())), false),
                        (Point::new(Mm((*x2).into()), Mm(flip_y(*y2).into())), false),
                    ],
                    is_closed: false,
                });
            }
            DrawOp::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => {
                layer.set_fill_color(pdf_color(*color));
                let points = calculate_points_for_circle(
                    Mm((*radius).into()),
                    Mm((*cx).into()),
                    Mm(flip_y(*cy).into()),
                );
                layer.add_polygon(Polygon {
                    rings: vec![points],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                });
            }
            DrawOp::Image {
                section,
                x,
                y,
                width,
                height,
            } => {
                if let Some(photo) = photos.get(section) {
                    draw_image(&layer, photo, *x, *y, *width, *height);
                }
            }
        }
    }

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{build_ops, ReportFields};
    use std::collections::BTreeSet;

    fn sample_fields() -> ReportFields {
        ReportFields {
            shipper_name: "Acme".to_string(),
            receipt_date: "01/01/2024".to_string(),
            no_document: "DOC-1".to_string(),
            transaction: "Inbound".to_string(),
            vehicle_no: "B1234".to_string(),
            container_no: "CONT-9".to_string(),
            warehouse_name: "WH-A".to_string(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let ops = build_ops(&sample_fields(), &BTreeSet::new());
        let bytes = render_ops(&ops, &BTreeMap::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_embedded_photo() {
        use printpdf::image_crate::{DynamicImage, RgbImage};

        let section = "segel".to_string();
        let ops = build_ops(&sample_fields(), &BTreeSet::from([section.clone()]));
        let photos = BTreeMap::from([(
            section,
            DecodedPhoto {
                image: DynamicImage::ImageRgb8(RgbImage::new(4, 4)),
                width_px: 4,
                height_px: 4,
            },
        )]);
        let bytes = render_ops(&ops, &photos).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
