//! Binary pixel mask with row-major linear indexing.
//!
//! Masks are produced by the caller (thresholding, edge detection) and are
//! read-only to the segmentation core. Foreground (`true`) marks the pixels
//! a stage operates on: for labeling that is "pixels interior to
//! edge-bounded regions", for the ink vote it is "ink".

use image::GrayImage;

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors raised by mask construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Bit buffer length does not equal `width * height`.
    SizeMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Provided buffer length.
        actual: usize,
    },
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "mask size mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for MaskError {}

// ── Types ──────────────────────────────────────────────────────────────────

/// Which gray level counts as mask foreground in [`PixelMask::from_gray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPolarity {
    /// Pixels at or below the threshold are foreground (ink on paper).
    DarkForeground,
    /// Pixels at or above the threshold are foreground.
    LightForeground,
}

/// An immutable binary grid over one page.
///
/// Linear indices run row-major: `index = row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Build a mask from a prepared bit buffer.
    ///
    /// Fails when `bits.len() != width * height`; no further validation is
    /// done — malformed geometry is caller error.
    pub fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Result<Self, MaskError> {
        let expected = width.checked_mul(height).ok_or(MaskError::SizeMismatch {
            expected: usize::MAX,
            actual: bits.len(),
        })?;

        if bits.len() != expected {
            return Err(MaskError::SizeMismatch {
                expected,
                actual: bits.len(),
            });
        }

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Threshold a grayscale page into a mask.
    ///
    /// With [`MaskPolarity::DarkForeground`] a pixel is foreground when its
    /// luma is `<= threshold`; with [`MaskPolarity::LightForeground`] when it
    /// is `>= threshold`.
    pub fn from_gray(gray: &GrayImage, threshold: u8, polarity: MaskPolarity) -> Self {
        let (w, h) = gray.dimensions();
        let bits = gray
            .as_raw()
            .iter()
            .map(|&luma| match polarity {
                MaskPolarity::DarkForeground => luma <= threshold,
                MaskPolarity::LightForeground => luma >= threshold,
            })
            .collect();

        Self {
            width: w as usize,
            height: h as usize,
            bits,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Foreground test. `index` must be in range.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn index_to_row(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn index_to_col(&self, index: usize) -> usize {
        index % self.width
    }

    pub fn row_col_to_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// True iff `candidate` is one of the four cardinal neighbors of `base`.
    ///
    /// The horizontal case is checked against the row's start offset: the
    /// last column of row `r` and the first column of row `r + 1` differ by
    /// one numerically but are not adjacent.
    pub fn is_adjacent(&self, base: usize, candidate: usize) -> bool {
        if candidate >= self.bits.len() {
            return false;
        }

        let row_start = base / self.width * self.width;
        let diff = base.abs_diff(candidate);

        diff == self.width
            || (diff == 1 && candidate >= row_start && candidate < row_start + self.width)
    }

    /// A mask of the same dimensions with foreground and background swapped.
    pub fn complement(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            bits: self.bits.iter().map(|&b| !b).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn from_bits_rejects_bad_length() {
        let err = PixelMask::from_bits(4, 3, vec![false; 11]).unwrap_err();
        assert_eq!(
            err,
            MaskError::SizeMismatch {
                expected: 12,
                actual: 11
            }
        );
        assert!(PixelMask::from_bits(4, 3, vec![false; 12]).is_ok());
    }

    #[test]
    fn index_math_round_trips() {
        let mask = PixelMask::from_bits(5, 4, vec![false; 20]).unwrap();
        for index in 0..mask.len() {
            let row = mask.index_to_row(index);
            let col = mask.index_to_col(index);
            assert_eq!(mask.row_col_to_index(row, col), index);
        }
    }

    #[test]
    fn adjacency_rejects_row_wrap() {
        let mask = PixelMask::from_bits(5, 4, vec![false; 20]).unwrap();

        // Last column of row 0 vs first column of row 1: numerically 1 apart.
        assert!(!mask.is_adjacent(4, 5));
        assert!(!mask.is_adjacent(5, 4));

        assert!(mask.is_adjacent(6, 5));
        assert!(mask.is_adjacent(6, 7));
        assert!(mask.is_adjacent(6, 1));
        assert!(mask.is_adjacent(6, 11));

        // Diagonals and self are not adjacent.
        assert!(!mask.is_adjacent(6, 0));
        assert!(!mask.is_adjacent(6, 12));
        assert!(!mask.is_adjacent(6, 6));

        // Out of range.
        assert!(!mask.is_adjacent(19, 24));
    }

    #[test]
    fn from_gray_polarity() {
        let mut img = GrayImage::new(2, 1);
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(1, 0, Luma([200]));

        let dark = PixelMask::from_gray(&img, 128, MaskPolarity::DarkForeground);
        assert!(dark.get(0));
        assert!(!dark.get(1));

        let light = PixelMask::from_gray(&img, 128, MaskPolarity::LightForeground);
        assert!(!light.get(0));
        assert!(light.get(1));
    }

    #[test]
    fn complement_flips_every_bit() {
        let mask = PixelMask::from_bits(2, 2, vec![true, false, false, true]).unwrap();
        let inv = mask.complement();
        for i in 0..mask.len() {
            assert_eq!(inv.get(i), !mask.get(i));
        }
    }
}
