//! Constants shared across the BM3D/V-BM3D engine

/// Side length of a block and of the DCT applied to it.
pub const BLOCK_SIZE: usize = 8;

/// Number of pixels in a block (`BLOCK_SIZE * BLOCK_SIZE`).
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Fixed group size: the reference block plus 7 matches.
pub const GROUP_SIZE: usize = 8;

/// Number of coefficients in an assembled 8x8x8 group
/// (`GROUP_SIZE * BLOCK_AREA`).
pub const GROUP_VOLUME: usize = GROUP_SIZE * BLOCK_AREA;

/// Maximum number of color channels handled at once (luma-only or YUV/RGB).
pub const MAX_CHANNELS: usize = 3;

/// Compensating factor applied during shrinkage for the inflation introduced
/// by the three forward DCT passes.
pub const SHRINKAGE_SCALE: f32 = 1.0 / 4096.0;

/// Channel sigmas at or below this value are treated as exactly zero noise
/// (and, when `chroma` is set, the channel is skipped entirely).
pub const SIGMA_EPSILON: f32 = f32::EPSILON;
