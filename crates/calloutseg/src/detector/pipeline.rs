//! Fixed-order detection pipeline: label → regularize → classify →
//! resolve → accept. No backtracking between stages.

use crate::blob::BlobId;
use crate::label::label_components;
use crate::mask::PixelMask;
use crate::DetectionResult;

use super::classify;
use super::config::DetectConfig;
use super::parentage::{BoundingDistanceResolver, OutlineRayResolver, ParentageResolver};

pub(crate) fn run(
    region_mask: &PixelMask,
    ink_mask: &PixelMask,
    config: &DetectConfig,
) -> DetectionResult {
    let mut arena = label_components(region_mask);

    for blob in arena.iter_mut() {
        blob.geometry_adjust(config.side_coverage);
    }

    let classes = classify::partition(&arena, ink_mask, &config.classify);
    tracing::info!(
        components = arena.len(),
        characters = classes.characters.len(),
        callouts = classes.callouts.len(),
        "classified page blobs"
    );

    // Callout candidates resolve against everything except glyph-sized ink:
    // characters sit inside the bubbles and would contaminate the rays of
    // nearly every interior.
    let mut is_character = vec![false; arena.len()];
    for &id in &classes.characters {
        is_character[id] = true;
    }
    let parent_pool: Vec<BlobId> = arena.ids().filter(|&id| !is_character[id]).collect();

    OutlineRayResolver.resolve(&mut arena, &classes.callouts, &parent_pool, region_mask);

    // A bubble interior must be enclosed by drawn ink; candidates whose
    // resolved parent is background (or who resolved to nothing) are out.
    let surviving: Vec<BlobId> = classes
        .callouts
        .iter()
        .copied()
        .filter(|&callout| {
            arena
                .blob(callout)
                .parent()
                .is_some_and(|parent| classes.is_ink[parent])
        })
        .collect();

    BoundingDistanceResolver.resolve(&mut arena, &classes.characters, &surviving, region_mask);

    let accepted: Vec<BlobId> = surviving
        .into_iter()
        .filter(|&callout| arena.num_surrounded_children(callout) > 0)
        .collect();

    tracing::info!(accepted = accepted.len(), "bubble detection finished");

    DetectionResult {
        image_size: [region_mask.width(), region_mask.height()],
        arena,
        accepted,
    }
}
