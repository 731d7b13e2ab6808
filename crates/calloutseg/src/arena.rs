//! Single-owner storage for one run's blobs.
//!
//! Parent/child links are plain indices into the arena, so the cyclic
//! parent/child structure never turns into an ownership cycle. Ids are the
//! indices themselves, which scopes the id space to one run.

use crate::blob::{Blob, BlobId};

/// Owns every blob produced by one labeling run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BlobArena {
    width: usize,
    height: usize,
    blobs: Vec<Blob>,
}

impl BlobArena {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blobs: Vec::new(),
        }
    }

    /// Take ownership of a finished blob, assigning its id.
    pub(crate) fn push(&mut self, mut blob: Blob) -> BlobId {
        let id = self.blobs.len();
        blob.set_id(id);
        self.blobs.push(blob);
        id
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn blob(&self, id: BlobId) -> &Blob {
        &self.blobs[id]
    }

    pub(crate) fn blob_mut(&mut self, id: BlobId) -> &mut Blob {
        &mut self.blobs[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Blob> {
        self.blobs.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Blob> {
        self.blobs.iter_mut()
    }

    /// All valid ids, in insertion (labeling) order.
    pub fn ids(&self) -> std::ops::Range<BlobId> {
        0..self.blobs.len()
    }

    /// The blob owning a pixel, if any.
    pub fn owner_of(&self, index: usize) -> Option<BlobId> {
        self.blobs
            .iter()
            .position(|blob| blob.contains_point(index))
    }

    /// Record `kid` as a child of `parent` and set the kid's parent link.
    pub(crate) fn link(&mut self, parent: BlobId, kid: BlobId) {
        self.blobs[parent].add_child(kid);
        self.blobs[kid].set_parent(parent);
    }

    /// Member pixel count of a blob plus all of its descendants.
    pub fn size_with_children(&self, id: BlobId) -> usize {
        let blob = &self.blobs[id];
        let mut size = blob.size();
        for &kid in blob.children() {
            size += self.size_with_children(kid);
        }
        size
    }

    /// Bounding-box coverage of a blob, optionally counting descendants'
    /// points as well — a hollow callout interior scores low on its own and
    /// high once the text it encloses is included.
    pub fn density(&self, id: BlobId, include_children: bool) -> f64 {
        let blob = &self.blobs[id];
        let size = if include_children {
            self.size_with_children(id)
        } else {
            blob.size()
        };
        size as f64 / blob.bounding_size() as f64
    }

    /// Count children that the blob actually [`surrounds`], filtering out
    /// bounding-box-only matches. Duplicate child entries count once each.
    ///
    /// [`surrounds`]: Blob::surrounds
    pub fn num_surrounded_children(&self, id: BlobId) -> usize {
        let blob = &self.blobs[id];
        blob.children()
            .iter()
            .filter(|&&kid| blob.surrounds(&self.blobs[kid]))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arena_from_blobs, blob_from_rows};

    #[test]
    fn push_assigns_sequential_ids() {
        let a = blob_from_rows(12, 12, &["##"]);
        let b = blob_from_rows(12, 12, &["", "", "", "...##"]);
        let arena = arena_from_blobs(12, 12, vec![a, b]);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.blob(0).id(), 0);
        assert_eq!(arena.blob(1).id(), 1);
    }

    #[test]
    fn owner_of_finds_the_member_blob() {
        let a = blob_from_rows(12, 12, &["##"]);
        let b = blob_from_rows(12, 12, &["", "", "", "...##"]);
        let arena = arena_from_blobs(12, 12, vec![a, b]);

        assert_eq!(arena.owner_of(0), Some(0));
        assert_eq!(arena.owner_of(3 * 12 + 4), Some(1));
        assert_eq!(arena.owner_of(7 * 12), None);
    }

    #[test]
    fn link_sets_parent_once_and_appends_children() {
        let ring = blob_from_rows(
            12,
            12,
            &[
                ".#######",
                ".#.....#",
                ".#.....#",
                ".#.....#",
                ".#######",
            ],
        );
        let kid = blob_from_rows(12, 12, &["", "", "...##", "...##"]);
        let mut arena = arena_from_blobs(12, 12, vec![ring, kid]);

        arena.link(0, 1);

        assert_eq!(arena.blob(1).parent(), Some(0));
        assert_eq!(arena.blob(0).children(), &[1]);
        assert_eq!(arena.num_surrounded_children(0), 1);
    }

    #[test]
    fn size_with_children_recurses() {
        let outer = blob_from_rows(
            12,
            12,
            &[
                "#########",
                "#.......#",
                "#.......#",
                "#.......#",
                "#.......#",
                "#########",
            ],
        );
        let mid = blob_from_rows(12, 12, &["", "", "..###", "..###"]);
        let leaf = blob_from_rows(12, 12, &["", "", "", "......#"]);
        let mut arena = arena_from_blobs(12, 12, vec![outer, mid, leaf]);

        arena.link(0, 1);
        arena.link(1, 2);

        let expected = arena.blob(0).size() + arena.blob(1).size() + arena.blob(2).size();
        assert_eq!(arena.size_with_children(0), expected);
        assert!(arena.density(0, true) > arena.density(0, false));
    }
}
