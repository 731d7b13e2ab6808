//! Bubble sub-image extraction for downstream feature extraction.

use image::{GrayImage, Luma};

use crate::blob::Blob;

/// Crop `page` to the blob's bounding box, blanking pixels outside the
/// blob's per-row extent to white.
///
/// Rows inside the box without member points come out fully white. The page
/// must share the blob's source-image dimensions; anything else is caller
/// error.
pub fn extract_bubble(page: &GrayImage, blob: &Blob) -> GrayImage {
    assert_eq!(
        (page.width() as usize, page.height() as usize),
        (blob.image_width(), blob.image_height()),
        "page dimensions must match the blob's source image"
    );

    let bounds = blob.boundaries();
    let mut out = GrayImage::new(blob.bounding_width() as u32, blob.bounding_height() as u32);

    for row in blob.min_row()..=blob.max_row() {
        for col in blob.min_col()..=blob.max_col() {
            let keep = bounds
                .get(&row)
                .is_some_and(|span| span.contains_col(col));

            let pixel = if keep {
                *page.get_pixel(col as u32, row as u32)
            } else {
                Luma([255])
            };

            out.put_pixel(
                (col - blob.min_col()) as u32,
                (row - blob.min_row()) as u32,
                pixel,
            );
        }
    }

    out
}
