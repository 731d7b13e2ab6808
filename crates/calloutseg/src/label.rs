//! Connected-component labeling over a binary mask.

use std::collections::VecDeque;

use crate::arena::BlobArena;
use crate::blob::Blob;
use crate::mask::PixelMask;

/// Label the 4-connected foreground components of `mask` into a fresh
/// arena.
///
/// Breadth-first flood fill: `visited` starts true for every background
/// pixel so the scan only seeds on foreground, and each pixel is marked at
/// enqueue time so it is enqueued at most once — one O(width × height)
/// pass. The component holding all four image corners is the page-frame
/// artifact and is left out of the arena.
pub fn label_components(mask: &PixelMask) -> BlobArena {
    let mut arena = BlobArena::new(mask.width(), mask.height());
    if mask.is_empty() {
        return arena;
    }

    let width = mask.width();
    let mut visited: Vec<bool> = (0..mask.len()).map(|i| !mask.get(i)).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();

    for seed in 0..mask.len() {
        if visited[seed] {
            continue;
        }

        let mut blob = Blob::new(width, mask.height(), seed);
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(index) = queue.pop_front() {
            let candidates = [
                index.checked_sub(1),
                Some(index + 1),
                index.checked_sub(width),
                Some(index + width),
            ];

            // Only adjacency and visited need checking: every background
            // pixel is pre-marked visited.
            for candidate in candidates.into_iter().flatten() {
                if mask.is_adjacent(index, candidate) && !visited[candidate] {
                    visited[candidate] = true;
                    blob.add_point(candidate);
                    queue.push_back(candidate);
                }
            }
        }

        if blob.is_border_blob() {
            tracing::debug!(size = blob.size(), "dropping page-frame component");
            continue;
        }

        arena.push(blob);
    }

    tracing::debug!(components = arena.len(), "labeled mask");
    arena
}
