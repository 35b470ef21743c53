//! Wall segments and the movement gate.
//!
//! # Spatial index
//!
//! Each wall's bounding box is stored in an R-tree (via `rstar`).  A move is
//! a short segment, so only walls whose box overlaps the move's box can
//! possibly intersect it; the exact test runs on those alone.  The answer is
//! the same as scanning every wall in order.

use std::fmt;

use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use cc_core::{Point, Segment};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: one wall plus its position in the ordered set.
#[derive(Clone)]
struct ObstacleEntry {
    segment: Segment,
    index:   usize,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[i32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.segment.start.into(), self.segment.end.into())
    }
}

/// Selects entries whose bounding box overlaps a query box.
struct Overlapping(AABB<[i32; 2]>);

impl SelectionFunction<ObstacleEntry> for Overlapping {
    fn should_unpack_parent(&self, envelope: &AABB<[i32; 2]>) -> bool {
        envelope.intersects(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &ObstacleEntry) -> bool {
        leaf.envelope().intersects(&self.0)
    }
}

// ── ObstacleSet ───────────────────────────────────────────────────────────────

/// Ordered, immutable collection of wall segments.
#[derive(Clone)]
pub struct ObstacleSet {
    segments:    Vec<Segment>,
    spatial_idx: RTree<ObstacleEntry>,
}

impl ObstacleSet {
    /// Build the set.  Order is preserved for [`segments`](Self::segments).
    pub fn new(segments: Vec<Segment>) -> Self {
        // Zero-length walls can never block (the intersection test rejects
        // them), so they are kept for rendering but left out of the index.
        let entries: Vec<ObstacleEntry> = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_degenerate())
            .map(|(index, &segment)| ObstacleEntry { segment, index })
            .collect();
        Self {
            segments,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All walls in construction order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `true` iff the straight move `from → to` crosses or touches no wall.
    ///
    /// Pure query.  Callers decide what a `false` means; the engine simply
    /// drops the move for that tick.
    pub fn can_move(&self, from: Point, to: Point) -> bool {
        self.first_blocking(from, to).is_none()
    }

    /// Index of the lowest-numbered wall blocking `from → to`, if any.
    pub fn first_blocking(&self, from: Point, to: Point) -> Option<usize> {
        let query: AABB<[i32; 2]> = AABB::from_corners(from.into(), to.into());
        self.spatial_idx
            .locate_with_selection_function(Overlapping(query))
            .filter(|e| cc_core::segments_intersect(from, to, e.segment.start, e.segment.end))
            .map(|e| e.index)
            .min()
    }
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ObstacleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObstacleSet")
            .field("segments", &self.segments)
            .finish()
    }
}

impl From<Vec<Segment>> for ObstacleSet {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}
