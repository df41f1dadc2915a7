//! # BM3D / V-BM3D denoising core
//!
//! This crate implements the numerical core of Block-Matching and 3D
//! Collaborative Filtering: block matching, the separable 3D DCT, hard
//! threshold/empirical-Wiener coefficient shrinkage, and overlap-add
//! aggregation, composed into a per-anchor frame driver.
//!
//! It does not read or write image/video files, expose a CLI, manage GPU
//! devices, or own multithreaded frame dispatch across a sequence (those
//! are a host application's job). What it owns is turning one or more
//! `f32` planes into a denoised plane.
//!
//! ## Quick start
//!
//! ```no_run
//! use bm3d::{denoise_spatial, Bm3dParams, ChannelMode, PlaneView};
//!
//! let width = 64;
//! let height = 64;
//! let noisy = vec![0.0f32; width * height];
//! let view = PlaneView::new(&noisy, width, height, width).unwrap();
//!
//! let params = Bm3dParams::builder()
//!     .sigma_luma(0.02)
//!     .channels(ChannelMode::Luma)
//!     .final_pass(true)
//!     .build()
//!     .unwrap();
//!
//! let denoised = denoise_spatial(&[view], &params).unwrap();
//! assert_eq!(denoised.len(), 1);
//! ```

pub mod aggregate;
pub mod driver;
pub mod group;

pub use bm3d_core::{
    BufferPool, Bm3dError, Bm3dParams, Bm3dParamsBuilder, Bm3dResult, ChannelMode, Plane,
    PlaneView, PlaneViewMut,
};
pub use bm3d_match::{spatial_search, temporal_search, Match, MatchSet};
pub use bm3d_shrink::{hard_threshold, wiener_filter};
pub use bm3d_transform::{dct3d_forward, dct3d_inverse, SimdLevel};

#[cfg(feature = "parallel")]
pub use driver::parallel::denoise_plane_parallel;

/// Engine version (the crate's own version, not a wire/bitstream version;
/// this crate defines no serialized format).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Denoise one or more spatially-coregistered planes (one per channel) with
/// spatial BM3D. `planes.len()` must equal `params.channels.channel_count()`.
pub fn denoise_spatial(planes: &[PlaneView], params: &Bm3dParams) -> Bm3dResult<Vec<Plane>> {
    let expected = params.channels.channel_count();
    if planes.len() != expected {
        return Err(Bm3dError::ChannelCountMismatch {
            expected,
            actual: planes.len(),
        });
    }
    planes
        .iter()
        .enumerate()
        .map(|(i, &plane)| driver::denoise_plane(plane, params, params.sigma[i]))
        .collect()
}

/// Denoise the center frame of a temporal stack (one stack per channel)
/// with V-BM3D. Each `stacks[c]` must hold exactly
/// `params.frames_per_channel()` planes, center frame at
/// `params.center_index()`.
pub fn denoise_temporal_frame(
    stacks: &[&[PlaneView]],
    params: &Bm3dParams,
) -> Bm3dResult<Vec<Plane>> {
    let expected = params.channels.channel_count();
    if stacks.len() != expected {
        return Err(Bm3dError::ChannelCountMismatch {
            expected,
            actual: stacks.len(),
        });
    }
    stacks
        .iter()
        .enumerate()
        .map(|(i, &stack)| driver::denoise_temporal_frame(stack, params, params.sigma[i]))
        .collect()
}
