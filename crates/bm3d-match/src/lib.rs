//! Block matching: a fixed 8-slot match set kept sorted by SSD, a spatial
//! exhaustive search, and a temporal predictive search used by V-BM3D.

use bm3d_core::consts::{BLOCK_AREA, BLOCK_SIZE, GROUP_SIZE};
use bm3d_core::plane::PlaneView;

/// One candidate block: its anchor position, the frame it was found in
/// (`0` for the spatial pass; a temporal stack index for V-BM3D), and its
/// sum-of-squared-differences against the group's reference block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub x: usize,
    pub y: usize,
    pub frame: usize,
    pub distance: f32,
}

/// The fixed-size set of the `GROUP_SIZE` best matches found so far for one
/// group. Once [`insert_anchor`](MatchSet::insert_anchor) has been called,
/// slot 0 is reserved for the reference block itself and is exempt from
/// both sorting and eviction, regardless of how its distance compares to
/// anything found later; the remaining slots hold up to `GROUP_SIZE - 1`
/// search candidates, kept sorted in descending distance order (the worst
/// of those is always at index 1, the best at the last occupied index).
/// Without `insert_anchor`, all `GROUP_SIZE` slots (including index 0)
/// behave as plain sorted candidate slots. `GROUP_SIZE` is 8, small enough
/// that a full re-sort on every insertion is simpler than maintaining a
/// heap and costs nothing measurable.
#[derive(Debug, Clone)]
pub struct MatchSet {
    slots: [Match; GROUP_SIZE],
    len: usize,
    anchor_pinned: bool,
}

const EMPTY_MATCH: Match = Match {
    x: 0,
    y: 0,
    frame: 0,
    distance: f32::INFINITY,
};

impl Default for MatchSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSet {
    pub fn new() -> Self {
        Self {
            slots: [EMPTY_MATCH; GROUP_SIZE],
            len: 0,
            anchor_pinned: false,
        }
    }

    /// Matches currently held. When an anchor has been inserted it is
    /// always the first element; the rest are sorted worst-to-best
    /// (ascending match quality, descending distance).
    pub fn matches(&self) -> &[Match] {
        &self.slots[..self.len]
    }

    pub fn is_full(&self) -> bool {
        self.len == GROUP_SIZE
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn contains(&self, x: usize, y: usize, frame: usize) -> bool {
        self.slots[..self.len]
            .iter()
            .any(|m| m.x == x && m.y == y && m.frame == frame)
    }

    /// First index eligible for sorting/eviction: 1 when the anchor pins
    /// slot 0, 0 otherwise.
    fn candidate_start(&self) -> usize {
        if self.anchor_pinned {
            1
        } else {
            0
        }
    }

    fn resort(&mut self) {
        let start = self.candidate_start();
        self.slots[start..self.len].sort_by(|a, b| b.distance.partial_cmp(&a.distance).unwrap());
    }

    /// Insert the group's reference block itself into slot 0, where it
    /// always stays: later candidates can never displace it, no matter how
    /// their distance compares to anything else in the set. Call this
    /// before any [`insert_if_not_in`](Self::insert_if_not_in) so the
    /// reference anchor is guaranteed to occupy slot 0 for the lifetime of
    /// the set.
    pub fn insert_anchor(&mut self, anchor: Match) {
        self.slots[0] = anchor;
        if self.len == 0 {
            self.len = 1;
        }
        self.anchor_pinned = true;
    }

    /// Insert `candidate` if no slot already holds the same `(x, y, frame)`
    /// position. While the set has fewer than `GROUP_SIZE` entries every new
    /// candidate is kept; once full, a candidate only displaces the current
    /// worst non-anchor slot when its distance is *strictly* less than that
    /// slot's distance. Returns whether the candidate was inserted.
    pub fn insert_if_not_in(&mut self, candidate: Match) -> bool {
        if self.contains(candidate.x, candidate.y, candidate.frame) {
            return false;
        }
        if self.len < GROUP_SIZE {
            self.slots[self.len] = candidate;
            self.len += 1;
            self.resort();
            return true;
        }
        let worst = self.candidate_start();
        if candidate.distance < self.slots[worst].distance {
            self.slots[worst] = candidate;
            self.resort();
            true
        } else {
            false
        }
    }
}

/// Exhaustive spatial search: scan every anchor-aligned position in
/// `[anchor - bm_range, anchor + bm_range]`, clamped to the plane, and keep
/// the `GROUP_SIZE` closest matches to `reference`. The anchor position
/// itself is inserted first via [`MatchSet::insert_anchor`], so it always
/// occupies slot 0 of the returned set even though the scan below revisits
/// it (the revisit is rejected by the duplicate-position check).
///
/// `frame_index` is recorded on each `Match` so callers assembling a group
/// across a temporal stack know which plane to read it from; a purely
/// spatial caller passes the same index for every call (conventionally `0`).
pub fn spatial_search(
    plane: &PlaneView,
    frame_index: usize,
    anchor_x: usize,
    anchor_y: usize,
    bm_range: usize,
    reference: &[f32; BLOCK_AREA],
) -> MatchSet {
    let mut set = MatchSet::new();
    set.insert_anchor(Match {
        x: anchor_x,
        y: anchor_y,
        frame: frame_index,
        distance: 0.0,
    });

    let max_x = plane.width() - BLOCK_SIZE;
    let max_y = plane.height() - BLOCK_SIZE;
    let x_min = anchor_x.saturating_sub(bm_range);
    let x_max = (anchor_x + bm_range).min(max_x);
    let y_min = anchor_y.saturating_sub(bm_range);
    let y_max = (anchor_y + bm_range).min(max_y);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let distance = plane.block_ssd(x, y, reference);
            set.insert_if_not_in(Match {
                x,
                y,
                frame: frame_index,
                distance,
            });
        }
    }

    set
}

/// Temporal predictive search: refine a small window around each of
/// `seeds` (typically positions carried forward from the previous frame's
/// matches, plus the zero-motion anchor) within `plane`, inserting every
/// candidate found into the caller's running `set`.
pub fn temporal_search(
    plane: &PlaneView,
    frame_index: usize,
    reference: &[f32; BLOCK_AREA],
    seeds: &[(usize, usize)],
    ps_range: usize,
    set: &mut MatchSet,
) {
    let max_x = plane.width() - BLOCK_SIZE;
    let max_y = plane.height() - BLOCK_SIZE;

    for &(seed_x, seed_y) in seeds {
        let x_min = seed_x.saturating_sub(ps_range);
        let x_max = (seed_x + ps_range).min(max_x);
        let y_min = seed_y.saturating_sub(ps_range);
        let y_max = (seed_y + ps_range).min(max_y);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let distance = plane.block_ssd(x, y, reference);
                set.insert_if_not_in(Match {
                    x,
                    y,
                    frame: frame_index,
                    distance,
                });
            }
        }
    }
}
