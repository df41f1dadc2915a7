//! The frame driver: walks the anchor schedule implied by `block_step`, runs
//! block matching + group shrinkage per anchor, and scatter-adds the result
//! into the plane-sized aggregation buffers.

use bm3d_core::consts::{BLOCK_AREA, BLOCK_SIZE, SIGMA_EPSILON};
use bm3d_core::plane::{Plane, PlaneView};
use bm3d_core::{Bm3dParams, Bm3dResult, ChannelMode};
use bm3d_match::{spatial_search, temporal_search, Match, MatchSet};
use bm3d_shrink::{hard_threshold, wiener_filter};
use bm3d_transform::{dct3d_forward, dct3d_inverse};

use crate::aggregate::{finish, scatter_add};
use crate::group::{assemble, assemble_multi};

/// Anchor x/y coordinates covering `extent` with stride `step`, always
/// including the final clamped anchor so the last `BLOCK_SIZE` columns/rows
/// are covered even when `step` doesn't divide evenly.
fn anchor_positions(extent: usize, step: usize) -> Vec<usize> {
    let last = extent - BLOCK_SIZE;
    let mut positions: Vec<usize> = (0..=last).step_by(step.max(1)).collect();
    if *positions.last().unwrap() != last {
        positions.push(last);
    }
    positions
}

fn anchor_grid(width: usize, height: usize, step: usize) -> Vec<(usize, usize)> {
    let xs = anchor_positions(width, step);
    let ys = anchor_positions(height, step);
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
        .collect()
}

/// Scatter one shrunk group's distinct blocks (the non-padding prefix of
/// `matches`) back into `wdst`/`weight`, reading the denoised content from
/// `cube` (already inverse-transformed and compensated by
/// `SHRINKAGE_SCALE`).
fn scatter_group(
    cube: &[f32],
    matches: &[Match],
    group_weight: f32,
    wdst: &mut Plane,
    weight: &mut Plane,
) {
    for (z, m) in matches.iter().enumerate() {
        let base = z * BLOCK_AREA;
        let block: [f32; BLOCK_AREA] = cube[base..base + BLOCK_AREA].try_into().unwrap();
        scatter_add(wdst, weight, m.x, m.y, &block, group_weight);
    }
}

/// One hard-threshold or Wiener pass over `content`, matched against
/// `guide` (the same plane for the basic estimate; the basic estimate
/// itself, as the Wiener guide, for the final pass).
fn run_spatial_pass(
    guide: &PlaneView,
    content: &PlaneView,
    sigma: f32,
    block_step: usize,
    bm_range: usize,
    wiener: bool,
) -> Plane {
    let width = content.width();
    let height = content.height();
    let mut wdst = Plane::new(width, height);
    let mut weight = Plane::new(width, height);

    for (x, y) in anchor_grid(width, height, block_step) {
        let mut reference = [0.0f32; BLOCK_AREA];
        guide.read_block(x, y, &mut reference);
        let set = spatial_search(guide, 0, x, y, bm_range, &reference);
        let matches = set.matches();

        let mut content_cube = assemble(content, matches);
        let group_weight = if wiener {
            let mut guide_cube = assemble(guide, matches);
            dct3d_forward(&mut guide_cube);
            dct3d_forward(&mut content_cube);
            wiener_filter(&mut content_cube, &guide_cube, sigma)
        } else {
            dct3d_forward(&mut content_cube);
            hard_threshold(&mut content_cube, sigma)
        };
        dct3d_inverse(&mut content_cube);
        for c in content_cube.iter_mut() {
            *c *= bm3d_core::consts::SHRINKAGE_SCALE;
        }

        scatter_group(&content_cube, matches, group_weight, &mut wdst, &mut weight);
    }

    finish(&wdst, &weight)
}

/// Denoise a single plane with spatial BM3D: a hard-threshold basic
/// estimate, followed by an empirical-Wiener final pass when
/// `params.final_pass` is set. `sigma` is the noise standard deviation for
/// this specific channel (callers with multiple channels pick the matching
/// entry out of `params.sigma`).
pub fn denoise_plane(noisy: PlaneView, params: &Bm3dParams, sigma: f32) -> Bm3dResult<Plane> {
    if params.channels == ChannelMode::Chroma3 && sigma <= SIGMA_EPSILON {
        log::debug!("bm3d spatial pass: sigma below epsilon, passing channel through unchanged");
        return Ok(Plane::from_view(&noisy));
    }
    log::debug!(
        "bm3d spatial pass: {}x{} sigma={} block_step={}",
        noisy.width(),
        noisy.height(),
        sigma,
        params.block_step
    );
    let basic = run_spatial_pass(
        &noisy,
        &noisy,
        sigma,
        params.block_step,
        params.bm_range,
        false,
    );
    if !params.final_pass {
        return Ok(basic);
    }
    log::debug!("bm3d wiener pass");
    let basic_view = basic.view();
    Ok(run_spatial_pass(
        &basic_view,
        &noisy,
        sigma,
        params.block_step,
        params.bm_range,
        true,
    ))
}

/// Predict temporal search seeds for `anchor` from the current best
/// matches, applying each match's `(dx, dy)` offset from `anchor` as a
/// constant-motion assumption. Falls back to the anchor itself when there
/// are no matches yet.
fn predict_seeds(anchor: (usize, usize), set: &MatchSet, ps_num: usize) -> Vec<(usize, usize)> {
    let matches = set.matches();
    if matches.is_empty() {
        return vec![anchor];
    }
    matches
        .iter()
        .rev()
        .take(ps_num.max(1))
        .map(|m| {
            let dx = m.x as isize - anchor.0 as isize;
            let dy = m.y as isize - anchor.1 as isize;
            (
                (anchor.0 as isize + dx).max(0) as usize,
                (anchor.1 as isize + dy).max(0) as usize,
            )
        })
        .collect()
}

/// Denoise the center frame of a temporal stack with V-BM3D: spatial search
/// within the center frame, then temporal predictive search into every
/// other frame, followed by the same shrinkage/aggregation as
/// [`denoise_plane`].
pub fn denoise_temporal_frame(
    stack: &[PlaneView],
    params: &Bm3dParams,
    sigma: f32,
) -> Bm3dResult<Plane> {
    let expected = params.frames_per_channel();
    if stack.len() != expected {
        return Err(bm3d_core::Bm3dError::FrameStackSizeMismatch {
            radius: params.radius,
            expected,
            actual: stack.len(),
        });
    }

    let center_index = params.center_index();
    let center = stack[center_index];
    let width = center.width();
    let height = center.height();

    if params.channels == ChannelMode::Chroma3 && sigma <= SIGMA_EPSILON {
        log::debug!("bm3d temporal pass: sigma below epsilon, passing channel through unchanged");
        return Ok(Plane::from_view(&center));
    }

    log::debug!(
        "bm3d temporal pass: {}x{} radius={} frames={}",
        width,
        height,
        params.radius,
        stack.len()
    );

    let mut wdst = Plane::new(width, height);
    let mut weight = Plane::new(width, height);

    for (x, y) in anchor_grid(width, height, params.block_step) {
        let mut reference = [0.0f32; BLOCK_AREA];
        center.read_block(x, y, &mut reference);

        let mut set = spatial_search(&center, center_index, x, y, params.bm_range, &reference);

        for (frame_index, plane) in stack.iter().enumerate() {
            if frame_index == center_index {
                continue;
            }
            let seeds = predict_seeds((x, y), &set, params.ps_num);
            temporal_search(
                plane,
                frame_index,
                &reference,
                &seeds,
                params.ps_range,
                &mut set,
            );
        }

        let matches = set.matches();
        let mut cube = assemble_multi(stack, matches);
        dct3d_forward(&mut cube);
        let group_weight = hard_threshold(&mut cube, sigma);
        dct3d_inverse(&mut cube);
        for c in cube.iter_mut() {
            *c *= bm3d_core::consts::SHRINKAGE_SCALE;
        }

        // Only the center frame's matches land in this call's output; the
        // other frames' matched blocks only ever widened the group.
        let center_matches: Vec<Match> = matches
            .iter()
            .copied()
            .filter(|m| m.frame == center_index)
            .collect();
        for m in &center_matches {
            let z = matches.iter().position(|c| c == m).unwrap();
            let base = z * BLOCK_AREA;
            let block: [f32; BLOCK_AREA] = cube[base..base + BLOCK_AREA].try_into().unwrap();
            scatter_add(&mut wdst, &mut weight, m.x, m.y, &block, group_weight);
        }
        // The anchor block itself (distance 0 in the center frame) is
        // always among `set`'s matches, so `center_matches` is never empty.
        debug_assert!(!center_matches.is_empty());
    }

    Ok(finish(&wdst, &weight))
}

#[cfg(feature = "parallel")]
pub mod parallel {
    //! Row-parallel driver: each row of anchors runs independently
    //! with privatized `wdst`/`weight` accumulators, merged into the shared
    //! buffers after all rows complete.

    use rayon::prelude::*;

    use super::*;

    /// Parallel counterpart of [`super::denoise_plane`]: the per-anchor work
    /// is identical, only the anchor loop is distributed across rows.
    pub fn denoise_plane_parallel(
        noisy: PlaneView,
        params: &Bm3dParams,
        sigma: f32,
    ) -> Bm3dResult<Plane> {
        let basic = run_spatial_pass_parallel(
            &noisy,
            &noisy,
            sigma,
            params.block_step,
            params.bm_range,
            false,
        );
        if !params.final_pass {
            return Ok(basic);
        }
        let basic_view = basic.view();
        Ok(run_spatial_pass_parallel(
            &basic_view,
            &noisy,
            sigma,
            params.block_step,
            params.bm_range,
            true,
        ))
    }

    fn run_spatial_pass_parallel(
        guide: &PlaneView,
        content: &PlaneView,
        sigma: f32,
        block_step: usize,
        bm_range: usize,
        wiener: bool,
    ) -> Plane {
        let width = content.width();
        let height = content.height();
        let ys = anchor_positions(height, block_step);
        let xs = anchor_positions(width, block_step);

        // Each row of anchors gets its own full-size accumulator pair,
        // zeroed independently; blocks from different anchor rows can still
        // land on the same pixel, but summing the privatized buffers
        // afterward is exact since scatter-add is already just a sum.
        let per_row: Vec<(Plane, Plane)> = ys
            .par_iter()
            .map(|&y| {
                let mut wdst = Plane::new(width, height);
                let mut weight = Plane::new(width, height);
                for &x in &xs {
                    let mut reference = [0.0f32; BLOCK_AREA];
                    guide.read_block(x, y, &mut reference);
                    let set = spatial_search(guide, 0, x, y, bm_range, &reference);
                    let matches = set.matches();

                    let mut content_cube = assemble(content, matches);
                    let group_weight = if wiener {
                        let mut guide_cube = assemble(guide, matches);
                        dct3d_forward(&mut guide_cube);
                        dct3d_forward(&mut content_cube);
                        wiener_filter(&mut content_cube, &guide_cube, sigma)
                    } else {
                        dct3d_forward(&mut content_cube);
                        hard_threshold(&mut content_cube, sigma)
                    };
                    dct3d_inverse(&mut content_cube);
                    for c in content_cube.iter_mut() {
                        *c *= bm3d_core::consts::SHRINKAGE_SCALE;
                    }
                    scatter_group(&content_cube, matches, group_weight, &mut wdst, &mut weight);
                }
                (wdst, weight)
            })
            .collect();

        let mut wdst = Plane::new(width, height);
        let mut weight = Plane::new(width, height);
        for (row_wdst, row_weight) in per_row {
            for y in 0..height {
                for x in 0..width {
                    let w = wdst.at(x, y) + row_wdst.at(x, y);
                    wdst.set(x, y, w);
                    let wt = weight.at(x, y) + row_weight.at(x, y);
                    weight.set(x, y, wt);
                }
            }
        }

        finish(&wdst, &weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_positions_cover_full_extent_with_final_clamp() {
        let positions = anchor_positions(20, 8);
        assert_eq!(positions.first(), Some(&0));
        assert_eq!(positions.last(), Some(&(20 - BLOCK_SIZE)));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn anchor_positions_exact_multiple_has_no_duplicate_tail() {
        let positions = anchor_positions(24, 8);
        assert_eq!(positions, vec![0, 8, 16]);
    }
}
