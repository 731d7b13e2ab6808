//! Parent/child assignment between candidate blobs.
//!
//! Two interchangeable strategies: [`OutlineRayResolver`] walks rays
//! outward from a kid's border and demands that everything they land on
//! agrees, [`BoundingDistanceResolver`] ranks containing boxes by mean edge
//! gap. Both record their results through the arena's parent/child links.

use crate::arena::BlobArena;
use crate::blob::BlobId;
use crate::mask::PixelMask;
use crate::outline::trace_border;

/// Strategy for assigning each kid blob at most one parent.
///
/// Implementations record results via the arena: the parent gains a child
/// entry and the kid's parent is set. Kids may end up without a parent;
/// that is an ordinary outcome, never an error.
pub trait ParentageResolver {
    /// Assign parents for `kids` out of `possible_parents`.
    ///
    /// `region_mask` is the mask the blobs were labeled from; only the
    /// precise resolver reads it.
    fn resolve(
        &self,
        arena: &mut BlobArena,
        kids: &[BlobId],
        possible_parents: &[BlobId],
        region_mask: &PixelMask,
    );
}

const NO_OWNER: u32 = u32::MAX;

/// Precise resolver: from every border point of a kid, walk outward along
/// the direction that exposed the point, across background pixels, until a
/// foreground pixel is reached.
///
/// A landing pixel owned by a possible parent is a hit; landing on
/// foreground owned by nobody in the pool — or on the kid itself, reached
/// across a concavity — ends the ray without a hit, as does leaving the
/// image. All hits must name the same blob: two distinct ids reject the kid
/// as ambiguous and it keeps no parent.
pub struct OutlineRayResolver;

impl ParentageResolver for OutlineRayResolver {
    fn resolve(
        &self,
        arena: &mut BlobArena,
        kids: &[BlobId],
        possible_parents: &[BlobId],
        region_mask: &PixelMask,
    ) {
        let owner = ownership_raster(arena, possible_parents, region_mask.len());

        for &kid in kids {
            if let Some(parent) = agreed_ray_target(arena, kid, &owner, region_mask) {
                arena.link(parent, kid);
            }
        }
    }
}

/// Map each pixel to the pool blob owning it, `NO_OWNER` elsewhere.
fn ownership_raster(arena: &BlobArena, pool: &[BlobId], len: usize) -> Vec<u32> {
    let mut owner = vec![NO_OWNER; len];
    for &id in pool {
        for &point in arena.blob(id).points() {
            owner[point] = id as u32;
        }
    }
    owner
}

fn agreed_ray_target(
    arena: &BlobArena,
    kid: BlobId,
    owner: &[u32],
    region_mask: &PixelMask,
) -> Option<BlobId> {
    let blob = arena.blob(kid);
    let mut agreed: Option<BlobId> = None;

    for point in trace_border(blob) {
        let Some(hit) = walk_ray(region_mask, point.row, point.col, point.step, owner) else {
            continue;
        };
        if hit == kid {
            continue;
        }

        match agreed {
            None => agreed = Some(hit),
            Some(existing) if existing != hit => {
                tracing::debug!(
                    kid,
                    first = existing,
                    second = hit,
                    "ambiguous parentage, leaving unassigned"
                );
                return None;
            }
            Some(_) => {}
        }
    }

    agreed
}

/// Step across background pixels; the first foreground pixel decides the
/// outcome.
fn walk_ray(
    region_mask: &PixelMask,
    row: usize,
    col: usize,
    step: (isize, isize),
    owner: &[u32],
) -> Option<BlobId> {
    let width = region_mask.width() as isize;
    let height = region_mask.height() as isize;
    let (dr, dc) = step;

    let mut r = row as isize + dr;
    let mut c = col as isize + dc;

    while r >= 0 && c >= 0 && r < height && c < width {
        let index = (r * width + c) as usize;
        if region_mask.get(index) {
            let id = owner[index];
            return (id != NO_OWNER).then_some(id as BlobId);
        }

        r += dr;
        c += dc;
    }

    None
}

/// Approximate resolver: among possible parents whose bounding box strictly
/// contains the kid's, pick the one with the smallest mean edge gap.
///
/// First-seen pool order wins ties. There is no ambiguity rejection; this
/// trades the outline walk's precision for a pair of box comparisons.
pub struct BoundingDistanceResolver;

impl ParentageResolver for BoundingDistanceResolver {
    fn resolve(
        &self,
        arena: &mut BlobArena,
        kids: &[BlobId],
        possible_parents: &[BlobId],
        _region_mask: &PixelMask,
    ) {
        for &kid in kids {
            let mut best: Option<(BlobId, f64)> = None;

            for &parent in possible_parents {
                if parent == kid {
                    continue;
                }

                let distance = arena.blob(parent).avg_containing_distance(arena.blob(kid));
                if distance < 0.0 {
                    continue;
                }

                let better = match best {
                    None => true,
                    Some((_, best_distance)) => distance < best_distance,
                };
                if better {
                    best = Some((parent, distance));
                }
            }

            if let Some((parent, _)) = best {
                arena.link(parent, kid);
            }
        }
    }
}
