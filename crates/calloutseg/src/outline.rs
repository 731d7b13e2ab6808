//! Border tracing and outline-verified enclosure.
//!
//! [`Blob::outline`] derives a per-row silhouette interval from the member
//! points; [`Blob::surrounds`] checks that interval against another blob's
//! [`Blob::outer_columns`] extent. The outline walk also records, per border
//! point, the outward step that exposed it — the ray directions used by the
//! precise parentage resolver.

use std::collections::{HashMap, HashSet};

use crate::blob::{Blob, ColSpan};

/// Offsets for candidate propagation: all eight neighbors, clockwise.
const NEIGHBOR_STEPS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Offsets that decide border membership. Only cardinal directions count: a
/// diagonal-only gap would promote two touching interior points to the
/// border.
const BORDER_STEPS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A border pixel together with the step that exposed it: the first cardinal
/// direction whose neighbor fell outside the point set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BorderPoint {
    pub row: usize,
    pub col: usize,
    /// Outward (row, col) step from this point into background.
    pub step: (isize, isize),
}

/// Walk the blob's border starting from the first member point on the
/// topmost row.
///
/// A popped candidate is a border point when any cardinal neighbor is
/// missing from the point set (pixels beyond the image count as missing);
/// border points push their 8-connected in-blob neighbors as further
/// candidates. Interior candidates propagate nothing.
pub(crate) fn trace_border(blob: &Blob) -> Vec<BorderPoint> {
    let width = blob.image_width();
    let height = blob.image_height();

    let mut border = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut candidates: Vec<usize> = Vec::new();

    for col in blob.min_col()..=blob.max_col() {
        let index = blob.min_row() * width + col;
        if blob.contains_point(index) {
            candidates.push(index);
            break;
        }
    }

    while let Some(candidate) = candidates.pop() {
        // A point can be pushed a second time before its first pop.
        if !visited.insert(candidate) {
            continue;
        }

        let row = candidate / width;
        let col = candidate % width;

        for &(dr, dc) in &BORDER_STEPS {
            if in_blob(blob, width, height, row as isize + dr, col as isize + dc) {
                continue;
            }

            border.push(BorderPoint {
                row,
                col,
                step: (dr, dc),
            });

            for &(dr8, dc8) in &NEIGHBOR_STEPS {
                let nr = row as isize + dr8;
                let nc = col as isize + dc8;
                if in_blob(blob, width, height, nr, nc) {
                    let index = nr as usize * width + nc as usize;
                    if !visited.contains(&index) {
                        candidates.push(index);
                    }
                }
            }

            break;
        }
    }

    border
}

fn in_blob(blob: &Blob, width: usize, height: usize, row: isize, col: isize) -> bool {
    if row < 0 || col < 0 || row >= height as isize || col >= width as isize {
        return false;
    }
    blob.contains_point(row as usize * width + col as usize)
}

impl Blob {
    /// Per-row border silhouette, collapsed to one contiguous column
    /// interval per row.
    ///
    /// The collapse keeps only `[min, max]` of the border columns found on a
    /// row, so disjoint ranges on one row (blobs with holes there) are not
    /// representable; the hull interval stands in for them. Rows the border
    /// walk never reached are absent from the map.
    pub fn outline(&self) -> HashMap<usize, ColSpan> {
        let mut rows: HashMap<usize, ColSpan> = HashMap::new();

        for point in trace_border(self) {
            rows.entry(point.row)
                .and_modify(|span| {
                    if point.col < span.start {
                        span.start = point.col;
                    } else if point.col > span.end {
                        span.end = point.col;
                    }
                })
                .or_insert(ColSpan {
                    start: point.col,
                    end: point.col,
                });
        }

        rows
    }

    /// Leftmost and rightmost member column for every row of the bounding
    /// box, by plain row scans, indexed from `min_row`.
    ///
    /// Rows without member points keep the full box span. This is the cheap
    /// "own silhouette extent" of a containment *target*; [`outline`] is the
    /// *container's* boundary.
    ///
    /// [`outline`]: Blob::outline
    pub fn outer_columns(&self) -> Vec<ColSpan> {
        let width = self.image_width();
        let mut spans = Vec::with_capacity(self.bounding_height());

        for row in self.min_row()..=self.max_row() {
            let mut first = self.min_col();
            let mut last = self.max_col();

            for col in self.min_col()..=self.max_col() {
                if self.contains_point(row * width + col) {
                    first = col;
                    break;
                }
            }

            for col in (self.min_col()..=self.max_col()).rev() {
                if self.contains_point(row * width + col) {
                    last = col;
                    break;
                }
            }

            spans.push(ColSpan {
                start: first,
                end: last,
            });
        }

        spans
    }

    /// Outline-verified enclosure, the precise counterpart of
    /// [`contains`](Blob::contains).
    ///
    /// Requires `contains`; then for every row spanned by `other`, this
    /// blob's outline interval must bracket `other`'s outer-column interval.
    /// Rows spanned by `other` but absent from this blob's outline are
    /// skipped (non-blocking).
    pub fn surrounds(&self, other: &Blob) -> bool {
        if !self.contains(other) {
            return false;
        }

        let outline = self.outline();
        let outer = other.outer_columns();

        for (i, span) in outer.iter().enumerate() {
            let row = other.min_row() + i;

            let Some(own) = outline.get(&row) else {
                continue;
            };

            if !own.brackets(span) {
                return false;
            }
        }

        true
    }
}
