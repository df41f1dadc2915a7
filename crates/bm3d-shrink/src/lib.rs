//! Coefficient shrinkage: hard-threshold for the basic estimate, empirical
//! Wiener filtering for the final pass, plus the adaptive group weight each
//! produces for aggregation.
//!
//! Both functions operate on a group already in the scaled frequency domain
//! produced by `bm3d_transform::dct3d_forward` (coefficients inflated by
//! `1 / SHRINKAGE_SCALE` relative to an orthonormal transform of the pixel
//! values). Thresholds and noise-energy terms are scaled to match.

use bm3d_core::consts::{GROUP_VOLUME, SHRINKAGE_SCALE, SIGMA_EPSILON};

/// `lambda_3d` hard-threshold multiplier applied to `sigma`.
pub const HARD_THRESHOLD_LAMBDA: f32 = 2.7;

/// Zero out coefficients below `HARD_THRESHOLD_LAMBDA * sigma` (DC exempt),
/// returning the adaptive group weight `1 / nnz`.
///
/// `group` holds the scaled frequency-domain coefficients of one 8x8x8
/// group; it is modified in place.
pub fn hard_threshold(group: &mut [f32; GROUP_VOLUME], sigma: f32) -> f32 {
    let threshold = HARD_THRESHOLD_LAMBDA * sigma / SHRINKAGE_SCALE;
    let mut nonzero = 0usize;
    for (i, c) in group.iter_mut().enumerate() {
        if i == 0 {
            // DC coefficient is always retained.
            nonzero += 1;
            continue;
        }
        if c.abs() < threshold {
            *c = 0.0;
        } else {
            nonzero += 1;
        }
    }
    1.0 / nonzero.max(1) as f32
}

/// Apply an empirical Wiener filter using `reference` (the basic estimate's
/// spectrum) as the energy guide, returning the adaptive group weight
/// `1 / sum(coef^2)`.
///
/// `group` holds the noisy group's scaled frequency-domain coefficients and
/// is filtered in place; `reference` is left untouched.
pub fn wiener_filter(
    group: &mut [f32; GROUP_VOLUME],
    reference: &[f32; GROUP_VOLUME],
    sigma: f32,
) -> f32 {
    let noise_energy = (sigma / SHRINKAGE_SCALE).powi(2);
    let mut weight_sum = 0.0f32;
    for i in 0..GROUP_VOLUME {
        let coef = if i == 0 {
            1.0
        } else {
            let energy = reference[i] * reference[i];
            energy / (energy + noise_energy + SIGMA_EPSILON)
        };
        group[i] *= coef;
        weight_sum += coef * coef;
    }
    if weight_sum <= SIGMA_EPSILON {
        1.0
    } else {
        1.0 / weight_sum
    }
}
