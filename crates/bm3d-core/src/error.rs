//! Error types for the BM3D/V-BM3D engine

use thiserror::Error;

/// Result type for BM3D operations
pub type Bm3dResult<T> = Result<T, Bm3dError>;

/// Errors that can occur when configuring or driving the denoising engine.
///
/// These cover only the caller-contract violations that are cheap to check
/// once at a call boundary. Conditions that are unrecoverable programming
/// errors inside the hot per-anchor loop (e.g. a zero aggregation weight)
/// are not represented here; they are `debug_assert!`s, not `Result`s.
#[derive(Error, Debug)]
pub enum Bm3dError {
    #[error("plane dimensions {width}x{height} are smaller than the 8x8 block size")]
    PlaneTooSmall { width: usize, height: usize },

    #[error("stride {stride} is smaller than width {width}")]
    StrideTooSmall { stride: usize, width: usize },

    #[error("block_step {0} is out of range [1, 8]")]
    InvalidBlockStep(usize),

    #[error("bm_range must be at least 1, got {0}")]
    InvalidBmRange(usize),

    #[error("ps_num {ps_num} must be between 1 and 8")]
    InvalidPsNum { ps_num: usize },

    #[error("expected {expected} channels, got {actual}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    #[error("temporal radius {radius} requires {expected} source planes per channel, got {actual}")]
    FrameStackSizeMismatch {
        radius: usize,
        expected: usize,
        actual: usize,
    },

    #[error("source and destination/reference planes must share width/height/stride")]
    PlaneShapeMismatch,

    #[error("scratch buffer too small: expected at least {expected} floats, got {actual}")]
    ScratchTooSmall { expected: usize, actual: usize },
}
