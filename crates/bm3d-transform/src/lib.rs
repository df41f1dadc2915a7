//! The separable 3D DCT spectral primitive.
//!
//! A group cube is an 8x8x8 stack of spatial blocks, stored `z`-major with
//! each z-plane row-major. `dct3d_forward`/`dct3d_inverse` apply the
//! separable transform in place; `dct3d_forward_auto`/`dct3d_inverse_auto`
//! dispatch to a capability-detected path.

pub mod dct;
pub mod dct_simd;
pub mod simd;

pub use dct::{
    dct1d_forward, dct1d_inverse, dct3d_forward, dct3d_inverse, dct8x8_forward, dct8x8_inverse,
    transpose8,
};
pub use dct_simd::{dct3d_forward_auto, dct3d_inverse_auto};
pub use simd::SimdLevel;
