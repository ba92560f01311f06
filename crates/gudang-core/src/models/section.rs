//! The fixed photo sections.
//!
//! Order is significant: it drives the 4x4 report grid layout and the
//! per-submission photo naming. Section names are used verbatim as keys in
//! the `photo_urls` mapping.

/// Number of photo sections on the form and the report.
pub const SECTION_COUNT: usize = 16;

/// Photo sections in grid order.
pub const PHOTO_SECTIONS: [&str; SECTION_COUNT] = [
    "foto tampak depan",
    "depan sisi kiri",
    "depan sisi kanan",
    "segel",
    "foto tampak belakang sebelum dibuka",
    "sampling kanan",
    "sampling kiri",
    "foto tampak belakang sebelum muat",
    "foto setelah muat",
    "Product 1",
    "Product 2",
    "Product 3",
    "Product 4",
    "Product 5",
    "Product 6",
    "Product 7",
];

/// Whether `name` is one of the fixed section names.
pub fn is_valid_section(name: &str) -> bool {
    PHOTO_SECTIONS.contains(&name)
}
