//! Ink/background vote and candidate partition.

use crate::arena::BlobArena;
use crate::blob::BlobId;
use crate::mask::PixelMask;

use super::config::ClassifyConfig;

/// Classification of one run's blobs against the raw ink mask.
#[derive(Debug, Clone)]
pub(crate) struct Classification {
    /// Per-blob ink vote outcome, indexed by blob id.
    pub is_ink: Vec<bool>,
    /// Ink blobs sized like a single glyph.
    pub characters: Vec<BlobId>,
    /// Background blobs sized like a bubble interior.
    pub callouts: Vec<BlobId>,
}

/// Majority-vote every blob against `ink_mask`, then partition candidates
/// by size and bounding ratios relative to the page pixel count.
///
/// The vote runs over the raw thresholded mask, not the mask the blobs were
/// labeled from: an edge-bounded region reads as ink when the ink beneath
/// it does.
pub(crate) fn partition(
    arena: &BlobArena,
    ink_mask: &PixelMask,
    config: &ClassifyConfig,
) -> Classification {
    let total = (arena.width() * arena.height()) as f64;

    let mut is_ink = Vec::with_capacity(arena.len());
    let mut characters = Vec::new();
    let mut callouts = Vec::new();

    for blob in arena.iter() {
        let votes = blob
            .points()
            .iter()
            .filter(|&&point| ink_mask.get(point))
            .count();
        let ink = votes as f64 / blob.size() as f64 >= config.ink_vote_threshold;
        is_ink.push(ink);

        let size_ratio = blob.size() as f64 / total;
        let bounding_ratio = blob.bounding_size() as f64 / total;
        if bounding_ratio > config.max_bounding_ratio {
            continue;
        }

        if ink {
            if size_ratio >= config.character_min_size_ratio
                && size_ratio <= config.character_max_size_ratio
            {
                characters.push(blob.id());
            }
        } else if size_ratio >= config.callout_min_size_ratio
            && size_ratio <= config.callout_max_size_ratio
        {
            callouts.push(blob.id());
        }
    }

    Classification {
        is_ink,
        characters,
        callouts,
    }
}
