//! calloutseg — connected-component segmentation of comic-page speech
//! bubbles.
//!
//! The core consumes two binary masks of one rasterized page — a region
//! mask derived from a blurred, edge-detected pass (edge responses as
//! background) and an independently thresholded ink mask — and produces
//! the accepted callout (speech-bubble) regions together with the
//! text-like blobs they enclose. The pipeline stages are:
//!
//! 1. **Label** – breadth-first connected-component labeling of the region
//!    mask, excluding the page-frame artifact.
//! 2. **Regularize** – per-blob bounding-edge geometry adjustment.
//! 3. **Classify** – ink/background majority vote against the ink mask,
//!    then size/bounding-ratio partition into character and callout
//!    candidates.
//! 4. **Resolve** – outline-ray parentage for callout candidates (with
//!    explicit ambiguity rejection), bounding-distance parentage for
//!    character candidates.
//! 5. **Accept** – keep callouts that verifiably surround at least one
//!    child.
//!
//! # Public API
//! - [`BubbleDetector`] and [`DetectConfig`] as primary entry points
//! - [`PixelMask`] as the input seam, [`DetectionResult`] as the output
//! - blob, arena, and extraction types for consumers that crop or
//!   post-process the accepted regions
//!
//! Image decode, filtering (blur, threshold, edge detection), OCR, and
//! reading order are external concerns. The core is pure, synchronous, and
//! deterministic per call, holds no cross-run state, and does no I/O.

mod arena;
mod blob;
mod detector;
mod extract;
mod label;
mod mask;
mod outline;
#[cfg(test)]
mod test_utils;

pub use arena::BlobArena;
pub use blob::{Blob, BlobId, ColSpan};
pub use detector::{
    BoundingDistanceResolver, BubbleDetector, ClassifyConfig, DetectConfig, DetectError,
    OutlineRayResolver, ParentageResolver,
};
pub use extract::extract_bubble;
pub use label::label_components;
pub use mask::{MaskError, MaskPolarity, PixelMask};

/// Full detection result for a single page.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DetectionResult {
    /// Page dimensions [width, height].
    pub image_size: [usize; 2],
    /// Every labeled blob of this run; parent/child links point into it.
    pub arena: BlobArena,
    /// Accepted bubble ids, in labeling order.
    pub accepted: Vec<BlobId>,
}

impl DetectionResult {
    /// Construct an empty result for a page with the provided dimensions.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            image_size: [width, height],
            arena: BlobArena::new(width, height),
            accepted: Vec::new(),
        }
    }

    /// Accepted bubble blobs, in labeling order.
    pub fn bubbles(&self) -> impl Iterator<Item = &Blob> {
        self.accepted.iter().map(|&id| self.arena.blob(id))
    }

    /// Children of a bubble that it verifiably surrounds — the candidate
    /// character regions a consumer would hand to feature extraction.
    pub fn surrounded_children(&self, id: BlobId) -> Vec<BlobId> {
        let blob = self.arena.blob(id);
        blob.children()
            .iter()
            .copied()
            .filter(|&kid| blob.surrounds(self.arena.blob(kid)))
            .collect()
    }
}
