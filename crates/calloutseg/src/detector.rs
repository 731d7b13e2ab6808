//! High-level detection API.
//!
//! [`BubbleDetector`] is the primary entry point for segmenting a page into
//! callout regions. It wraps a [`DetectConfig`] and drives the fixed-order
//! pipeline over one pair of masks per call.

use crate::mask::PixelMask;
use crate::DetectionResult;

mod classify;
mod config;
mod parentage;
mod pipeline;

pub use config::{ClassifyConfig, DetectConfig};
pub use parentage::{BoundingDistanceResolver, OutlineRayResolver, ParentageResolver};

/// Errors raised by [`BubbleDetector::detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The two input masks cover differently sized pages.
    MaskSizeMismatch {
        /// Region mask dimensions [width, height].
        region: [usize; 2],
        /// Ink mask dimensions [width, height].
        ink: [usize; 2],
    },
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaskSizeMismatch { region, ink } => write!(
                f,
                "mask dimensions differ: region {}x{}, ink {}x{}",
                region[0], region[1], ink[0], ink[1]
            ),
        }
    }
}

impl std::error::Error for DetectError {}

/// Primary detection interface.
///
/// Encapsulates the tunable configuration. Create once, detect on many
/// pages; runs share no state, so detectors are freely usable from
/// multiple threads.
///
/// # Examples
///
/// ```
/// use calloutseg::{BubbleDetector, PixelMask};
///
/// let detector = BubbleDetector::new();
/// let region = PixelMask::from_bits(64, 48, vec![false; 64 * 48]).unwrap();
/// let ink = PixelMask::from_bits(64, 48, vec![false; 64 * 48]).unwrap();
/// let result = detector.detect(&region, &ink).unwrap();
/// assert!(result.accepted.is_empty());
/// ```
pub struct BubbleDetector {
    config: DetectConfig,
}

impl BubbleDetector {
    /// Create a detector with default thresholds.
    pub fn new() -> Self {
        Self {
            config: DetectConfig::default(),
        }
    }

    /// Create with full config control.
    pub fn with_config(config: DetectConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut DetectConfig {
        &mut self.config
    }

    /// Detect speech bubbles on one page.
    ///
    /// `region_mask` is the blurred, edge-detected page with edge responses
    /// as background: its foreground marks pixels interior to edge-bounded
    /// regions, which is what labeling groups into blobs. `ink_mask` is the
    /// independently thresholded raw page with ink as foreground, consulted
    /// only by the classification vote. Both must cover the same
    /// dimensions; producing them (blur, threshold, edge detection) is the
    /// caller's concern.
    ///
    /// An empty `accepted` list is the ordinary "no bubbles found" outcome,
    /// not an error. The call is pure and deterministic; pathological pages
    /// (many small blobs) can make the precise resolver slow, and callers
    /// needing bounded latency must impose their own limits.
    pub fn detect(
        &self,
        region_mask: &PixelMask,
        ink_mask: &PixelMask,
    ) -> Result<DetectionResult, DetectError> {
        if region_mask.width() != ink_mask.width() || region_mask.height() != ink_mask.height() {
            return Err(DetectError::MaskSizeMismatch {
                region: [region_mask.width(), region_mask.height()],
                ink: [ink_mask.width(), ink_mask.height()],
            });
        }

        Ok(pipeline::run(region_mask, ink_mask, &self.config))
    }
}

impl Default for BubbleDetector {
    fn default() -> Self {
        Self::new()
    }
}
