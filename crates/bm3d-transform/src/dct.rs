//! Length-8 DCT-II/DCT-III pair and the naive 8x8/8x8x8 references built on it.
//!
//! The forward transform is scaled so that a forward pass followed by an
//! inverse pass along the same axis returns the input multiplied by
//! [`FORWARD_SCALE`]. Composed across the three axes of a group cube this
//! gives the round-trip inflation that `bm3d-shrink`'s `SHRINKAGE_SCALE`
//! compensates for.

use std::f32::consts::{FRAC_1_SQRT_2, PI};

use bm3d_core::consts::{BLOCK_AREA, GROUP_VOLUME};

/// Extra multiplicative factor folded into every forward 1D pass. Three
/// passes compose to `FORWARD_SCALE^3 = 4096`, matching
/// `bm3d_core::consts::SHRINKAGE_SCALE`.
pub(crate) const FORWARD_SCALE: f32 = 16.0;

#[inline]
fn cu(u: usize) -> f32 {
    if u == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// Forward length-8 DCT-II, scaled by [`FORWARD_SCALE`].
pub fn dct1d_forward(input: &[f32; 8]) -> [f32; 8] {
    const N: usize = 8;
    let mut out = [0.0f32; N];
    for (u, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for (x, &v) in input.iter().enumerate() {
            sum += v * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos();
        }
        *slot = sum * cu(u) * (2.0 / N as f32).sqrt() * FORWARD_SCALE;
    }
    out
}

/// Inverse length-8 DCT-III, the exact mathematical inverse of the
/// *unscaled* [`dct1d_forward`] (i.e. with `FORWARD_SCALE` divided out).
pub fn dct1d_inverse(input: &[f32; 8]) -> [f32; 8] {
    const N: usize = 8;
    let mut out = [0.0f32; N];
    for (x, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for (u, &c) in input.iter().enumerate() {
            sum += cu(u) * c * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos();
        }
        *slot = sum * (2.0 / N as f32).sqrt();
    }
    out
}

/// Transpose an 8x8 block stored row-major in place.
pub fn transpose8(block: &mut [f32; BLOCK_AREA]) {
    for i in 0..8 {
        for j in (i + 1)..8 {
            block.swap(i * 8 + j, j * 8 + i);
        }
    }
}

/// Naive O(N^4) 8x8 DCT-II, kept as a cross-check reference for the
/// separable implementation in `dct_simd`.
pub fn dct8x8_forward_naive(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    const N: usize = 8;
    for u in 0..N {
        for v in 0..N {
            let mut sum = 0.0f32;
            for x in 0..N {
                for y in 0..N {
                    let px = input[y * N + x];
                    sum += px
                        * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos()
                        * (((2 * y + 1) as f32 * v as f32 * PI) / (2.0 * N as f32)).cos()
                        * cu(u)
                        * cu(v);
                }
            }
            output[v * N + u] = sum * (2.0 / N as f32) * FORWARD_SCALE;
        }
    }
}

/// Naive O(N^4) 8x8 DCT-III, the exact inverse of the unscaled
/// [`dct8x8_forward_naive`].
pub fn dct8x8_inverse_naive(input: &[f32; BLOCK_AREA], output: &mut [f32; BLOCK_AREA]) {
    const N: usize = 8;
    for x in 0..N {
        for y in 0..N {
            let mut sum = 0.0f32;
            for u in 0..N {
                for v in 0..N {
                    sum += input[v * N + u]
                        * cu(u)
                        * cu(v)
                        * (((2 * x + 1) as f32 * u as f32 * PI) / (2.0 * N as f32)).cos()
                        * (((2 * y + 1) as f32 * v as f32 * PI) / (2.0 * N as f32)).cos();
                }
            }
            output[y * N + x] = sum * 2.0 / N as f32;
        }
    }
}

/// In-place separable 8x8 DCT-II: row pass, transpose, row pass, transpose
/// back.
pub fn dct8x8_forward(block: &mut [f32; BLOCK_AREA]) {
    for row in 0..8 {
        let r = row * 8;
        let input: [f32; 8] = block[r..r + 8].try_into().unwrap();
        block[r..r + 8].copy_from_slice(&dct1d_forward(&input));
    }
    transpose8(block);
    for row in 0..8 {
        let r = row * 8;
        let input: [f32; 8] = block[r..r + 8].try_into().unwrap();
        block[r..r + 8].copy_from_slice(&dct1d_forward(&input));
    }
    transpose8(block);
}

/// In-place separable 8x8 DCT-III, the exact inverse of the unscaled
/// [`dct8x8_forward`].
pub fn dct8x8_inverse(block: &mut [f32; BLOCK_AREA]) {
    for row in 0..8 {
        let r = row * 8;
        let input: [f32; 8] = block[r..r + 8].try_into().unwrap();
        block[r..r + 8].copy_from_slice(&dct1d_inverse(&input));
    }
    transpose8(block);
    for row in 0..8 {
        let r = row * 8;
        let input: [f32; 8] = block[r..r + 8].try_into().unwrap();
        block[r..r + 8].copy_from_slice(&dct1d_inverse(&input));
    }
    transpose8(block);
}

/// Separable 8x8x8 forward DCT over a group cube (`z`-major, each z-plane
/// row-major 8x8). Spatial planes are transformed first, then the depth
/// axis, per block `(x, y)` position with stride `BLOCK_AREA`.
pub fn dct3d_forward(cube: &mut [f32; GROUP_VOLUME]) {
    for z in 0..8 {
        let base = z * BLOCK_AREA;
        let mut plane: [f32; BLOCK_AREA] = cube[base..base + BLOCK_AREA].try_into().unwrap();
        dct8x8_forward(&mut plane);
        cube[base..base + BLOCK_AREA].copy_from_slice(&plane);
    }
    for pos in 0..BLOCK_AREA {
        let mut col = [0.0f32; 8];
        for (z, slot) in col.iter_mut().enumerate() {
            *slot = cube[z * BLOCK_AREA + pos];
        }
        let out = dct1d_forward(&col);
        for (z, v) in out.into_iter().enumerate() {
            cube[z * BLOCK_AREA + pos] = v;
        }
    }
}

/// Inverse of [`dct3d_forward`]: depth axis first, then the spatial planes
/// (axis transforms commute, so either order recovers the same values).
pub fn dct3d_inverse(cube: &mut [f32; GROUP_VOLUME]) {
    for pos in 0..BLOCK_AREA {
        let mut col = [0.0f32; 8];
        for (z, slot) in col.iter_mut().enumerate() {
            *slot = cube[z * BLOCK_AREA + pos];
        }
        let out = dct1d_inverse(&col);
        for (z, v) in out.into_iter().enumerate() {
            cube[z * BLOCK_AREA + pos] = v;
        }
    }
    for z in 0..8 {
        let base = z * BLOCK_AREA;
        let mut plane: [f32; BLOCK_AREA] = cube[base..base + BLOCK_AREA].try_into().unwrap();
        dct8x8_inverse(&mut plane);
        cube[base..base + BLOCK_AREA].copy_from_slice(&plane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm3d_core::consts::SHRINKAGE_SCALE;

    fn sample_cube() -> [f32; GROUP_VOLUME] {
        let mut cube = [0.0f32; GROUP_VOLUME];
        for (i, v) in cube.iter_mut().enumerate() {
            *v = ((i * 37) % 251) as f32 * 0.1;
        }
        cube
    }

    #[test]
    fn dct1d_round_trip_recovers_input() {
        let input = [1.0, -2.0, 3.5, 0.0, 4.0, -1.5, 2.0, 0.5];
        let coeffs = dct1d_forward(&input);
        let back = dct1d_inverse(&coeffs);
        for i in 0..8 {
            assert!((back[i] - FORWARD_SCALE * input[i]).abs() < 1e-3);
        }
    }

    #[test]
    fn dct1d_preserves_energy_up_to_scale() {
        let input = [1.0, -2.0, 3.5, 0.0, 4.0, -1.5, 2.0, 0.5];
        let coeffs = dct1d_forward(&input);
        let lhs: f32 = coeffs.iter().map(|c| (c / FORWARD_SCALE).powi(2)).sum();
        let rhs: f32 = input.iter().map(|x| x * x).sum();
        assert!((lhs - rhs).abs() < 1e-3);
    }

    #[test]
    fn separable_matches_naive_forward() {
        let mut input = [0.0f32; BLOCK_AREA];
        for (i, v) in input.iter_mut().enumerate() {
            *v = ((i * 7) % 16) as f32;
        }
        let mut naive = [0.0f32; BLOCK_AREA];
        dct8x8_forward_naive(&input, &mut naive);

        let mut separable = input;
        dct8x8_forward(&mut separable);

        for i in 0..BLOCK_AREA {
            assert!((naive[i] - separable[i]).abs() < 1e-2);
        }
    }

    #[test]
    fn separable_matches_naive_inverse() {
        let mut input = [0.0f32; BLOCK_AREA];
        for (i, v) in input.iter_mut().enumerate() {
            *v = ((i * 3) % 11) as f32;
        }
        let mut naive = [0.0f32; BLOCK_AREA];
        dct8x8_inverse_naive(&input, &mut naive);

        let mut separable = input;
        dct8x8_inverse(&mut separable);

        for i in 0..BLOCK_AREA {
            assert!((naive[i] - separable[i]).abs() < 1e-2);
        }
    }

    #[test]
    fn dct3d_round_trip_matches_identity_after_shrinkage_scale() {
        let original = sample_cube();
        let mut cube = original;
        dct3d_forward(&mut cube);
        dct3d_inverse(&mut cube);
        for i in 0..GROUP_VOLUME {
            let recovered = cube[i] * SHRINKAGE_SCALE;
            assert!(
                (recovered - original[i]).abs() < 1e-2,
                "index {i}: recovered={}, original={}",
                recovered,
                original[i]
            );
        }
    }

    #[test]
    fn dct3d_forward_preserves_energy_up_to_scale() {
        let original = sample_cube();
        let mut cube = original;
        dct3d_forward(&mut cube);
        let lhs: f32 = cube
            .iter()
            .map(|c| (c / FORWARD_SCALE.powi(3)).powi(2))
            .sum();
        let rhs: f32 = original.iter().map(|x| x * x).sum();
        assert!((lhs - rhs).abs() / rhs.max(1.0) < 1e-2);
    }
}
