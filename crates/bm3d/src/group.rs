//! Group assembly: gather the blocks named by a [`MatchSet`] into an 8x8x8
//! cube, ready for `bm3d_transform::dct3d_forward`.

use bm3d_core::consts::{BLOCK_AREA, GROUP_SIZE, GROUP_VOLUME};
use bm3d_core::plane::PlaneView;
use bm3d_match::Match;

/// Assemble a group cube from a single plane. `matches` must be non-empty
/// and sorted worst-to-best, as produced by [`bm3d_match::MatchSet::matches`].
/// When fewer than [`GROUP_SIZE`] matches were found, the best (last) one is
/// repeated to fill the remaining depth slices; those padding slices are
/// never scattered back by [`crate::aggregate`], only the first
/// `matches.len()` slices correspond to real, distinct block positions.
pub fn assemble(plane: &PlaneView, matches: &[Match]) -> [f32; GROUP_VOLUME] {
    debug_assert!(!matches.is_empty());
    let mut cube = [0.0f32; GROUP_VOLUME];
    for z in 0..GROUP_SIZE {
        let idx = z.min(matches.len() - 1);
        let m = matches[idx];
        let mut block = [0.0f32; BLOCK_AREA];
        plane.read_block(m.x, m.y, &mut block);
        cube[z * BLOCK_AREA..(z + 1) * BLOCK_AREA].copy_from_slice(&block);
    }
    cube
}

/// Assemble a group cube across a temporal stack of planes, reading each
/// match's block from `stack[match.frame]` (the multi-frame case for
/// V-BM3D). `stack` must be indexable by every `m.frame` present in
/// `matches`.
pub fn assemble_multi(stack: &[PlaneView], matches: &[Match]) -> [f32; GROUP_VOLUME] {
    debug_assert!(!matches.is_empty());
    let mut cube = [0.0f32; GROUP_VOLUME];
    for z in 0..GROUP_SIZE {
        let idx = z.min(matches.len() - 1);
        let m = matches[idx];
        let mut block = [0.0f32; BLOCK_AREA];
        stack[m.frame].read_block(m.x, m.y, &mut block);
        cube[z * BLOCK_AREA..(z + 1) * BLOCK_AREA].copy_from_slice(&block);
    }
    cube
}
