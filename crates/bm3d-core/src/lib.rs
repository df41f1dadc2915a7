//! Core types shared across the BM3D/V-BM3D denoising engine
//!
//! This crate provides the `Plane`/`PlaneView` data model, the validated
//! per-pass configuration (`Bm3dParams`), shared constants, the error type
//! returned at call boundaries, and a buffer pool for recycling per-frame
//! scratch allocations across a video sequence.

pub mod buffer_pool;
pub mod consts;
pub mod error;
pub mod plane;
pub mod types;

pub use buffer_pool::BufferPool;
pub use error::{Bm3dError, Bm3dResult};
pub use plane::{Plane, PlaneView, PlaneViewMut};
pub use types::{Bm3dParams, Bm3dParamsBuilder, ChannelMode};
