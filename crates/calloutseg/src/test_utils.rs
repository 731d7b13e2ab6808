//! Shared synthetic fixtures for module tests.

use crate::arena::BlobArena;
use crate::blob::Blob;
use crate::mask::PixelMask;

/// Build a mask from an ASCII grid: `#` is foreground, anything else is
/// background. Rows may be ragged; the widest row sets the mask width.
pub(crate) fn mask_from_rows(rows: &[&str]) -> PixelMask {
    let height = rows.len();
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    let mut bits = vec![false; width * height];
    for (row, line) in rows.iter().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            if cell == '#' {
                bits[row * width + col] = true;
            }
        }
    }

    PixelMask::from_bits(width, height, bits).expect("fixture grid is consistent")
}

/// Build a blob over an `image_width x image_height` page from the `#`
/// cells of an ASCII grid anchored at the page origin.
pub(crate) fn blob_from_rows(image_width: usize, image_height: usize, rows: &[&str]) -> Blob {
    let mut indices = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            if cell == '#' {
                assert!(row < image_height && col < image_width, "cell outside page");
                indices.push(row * image_width + col);
            }
        }
    }

    let mut blob = Blob::new(
        image_width,
        image_height,
        *indices.first().expect("fixture blob has at least one cell"),
    );
    for &index in &indices[1..] {
        blob.add_point(index);
    }
    blob
}

/// Collect directly-built blobs into an arena.
pub(crate) fn arena_from_blobs(width: usize, height: usize, blobs: Vec<Blob>) -> BlobArena {
    let mut arena = BlobArena::new(width, height);
    for blob in blobs {
        arena.push(blob);
    }
    arena
}

/// The 20x20 synthetic bubble page: a hollow ink ring whose interior
/// encloses a solid 3x3 ink square, background elsewhere.
///
/// Returns `(region_mask, ink_mask)` the way the pipeline consumes them:
/// region foreground marks pixels interior to edge-bounded regions (edge
/// responses at every ink/background transition are background), ink
/// foreground marks ink. Labeling the region mask yields the page frame
/// (dropped), the ring band core, the bubble interior, and the square.
pub(crate) fn ring_and_square_page() -> (PixelMask, PixelMask) {
    const W: usize = 20;
    const H: usize = 20;

    fn in_rect(r: usize, c: usize, r0: usize, r1: usize, c0: usize, c1: usize) -> bool {
        r >= r0 && r <= r1 && c >= c0 && c <= c1
    }

    fn on_perimeter(r: usize, c: usize, r0: usize, r1: usize, c0: usize, c1: usize) -> bool {
        in_rect(r, c, r0, r1, c0, c1) && (r == r0 || r == r1 || c == c0 || c == c1)
    }

    let mut ink = vec![false; W * H];
    let mut region = vec![false; W * H];

    for r in 0..H {
        for c in 0..W {
            let band = in_rect(r, c, 3, 16, 3, 16) && !in_rect(r, c, 6, 13, 6, 13);
            let character = in_rect(r, c, 9, 11, 9, 11);
            ink[r * W + c] = band || character;

            let edge = on_perimeter(r, c, 3, 16, 3, 16)
                || on_perimeter(r, c, 5, 14, 5, 14)
                || on_perimeter(r, c, 8, 12, 8, 12);
            region[r * W + c] = !edge;
        }
    }

    (
        PixelMask::from_bits(W, H, region).expect("region grid is consistent"),
        PixelMask::from_bits(W, H, ink).expect("ink grid is consistent"),
    )
}
