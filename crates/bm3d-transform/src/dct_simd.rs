//! Capability-dispatched wrappers around the separable 8x8x8 DCT in [`crate::dct`].
//!
//! AVX2/NEON are currently thin pass-throughs to the scalar separable path,
//! compiled with the target feature enabled so LLVM auto-vectorizes the row
//! and depth-axis loops; there is no hand-written intrinsic kernel yet.

use bm3d_core::consts::GROUP_VOLUME;

use crate::dct::{dct3d_forward, dct3d_inverse};
use crate::simd::SimdLevel;

/// Check if AVX2 is available at runtime.
#[cfg(target_arch = "x86_64")]
pub fn has_avx2() -> bool {
    #[cfg(target_feature = "avx2")]
    {
        true
    }
    #[cfg(not(target_feature = "avx2"))]
    {
        is_x86_feature_detected!("avx2")
    }
}

/// Check if NEON is available at runtime.
#[cfg(target_arch = "aarch64")]
pub fn has_neon() -> bool {
    true
}

#[cfg(target_arch = "arm")]
pub fn has_neon() -> bool {
    std::arch::is_arm_feature_detected!("neon")
}

/// Dispatch the forward 3D DCT to the best available implementation.
#[inline]
pub fn dct3d_forward_auto(cube: &mut [f32; GROUP_VOLUME]) {
    match SimdLevel::detect() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { dct3d_forward_avx2(cube) },
        #[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
        SimdLevel::Neon => unsafe { dct3d_forward_neon(cube) },
        _ => dct3d_forward(cube),
    }
}

/// Dispatch the inverse 3D DCT to the best available implementation.
#[inline]
pub fn dct3d_inverse_auto(cube: &mut [f32; GROUP_VOLUME]) {
    match SimdLevel::detect() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { dct3d_inverse_avx2(cube) },
        #[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
        SimdLevel::Neon => unsafe { dct3d_inverse_neon(cube) },
        _ => dct3d_inverse(cube),
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn dct3d_forward_avx2(cube: &mut [f32; GROUP_VOLUME]) {
    dct3d_forward(cube);
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn dct3d_inverse_avx2(cube: &mut [f32; GROUP_VOLUME]) {
    dct3d_inverse(cube);
}

#[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
#[target_feature(enable = "neon")]
unsafe fn dct3d_forward_neon(cube: &mut [f32; GROUP_VOLUME]) {
    dct3d_forward(cube);
}

#[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
#[target_feature(enable = "neon")]
unsafe fn dct3d_inverse_neon(cube: &mut [f32; GROUP_VOLUME]) {
    dct3d_inverse(cube);
}
