//! Core configuration types for the BM3D/V-BM3D engine

use crate::consts::BLOCK_SIZE;
use crate::error::{Bm3dError, Bm3dResult};

/// Whether the engine processes a single luma plane or three coupled
/// channels (e.g. YUV/RGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// A single plane.
    Luma,
    /// Three coregistered planes processed together.
    Chroma3,
}

impl ChannelMode {
    pub fn channel_count(&self) -> usize {
        match self {
            ChannelMode::Luma => 1,
            ChannelMode::Chroma3 => 3,
        }
    }
}

/// Validated parameters for one denoising pass.
///
/// Constructed via [`Bm3dParams::builder`]; validation happens once here so
/// the per-anchor hot path never re-checks these invariants.
#[derive(Debug, Clone)]
pub struct Bm3dParams {
    /// Anchor stride in `[1, 8]`. Smaller means more overlap.
    pub block_step: usize,
    /// Half-side of the spatial exhaustive search window.
    pub bm_range: usize,
    /// Temporal half-window; 0 disables V-BM3D.
    pub radius: usize,
    /// Predictive-search seed count; ignored when `radius == 0`.
    pub ps_num: usize,
    /// Predictive-search per-seed half-side; ignored when `radius == 0`.
    pub ps_range: usize,
    /// Noise standard deviation per channel.
    pub sigma: [f32; 3],
    /// Single luma plane or three coupled channels.
    pub channels: ChannelMode,
    /// Hard-threshold (`false`) or empirical-Wiener (`true`) shrinkage.
    pub final_pass: bool,
}

impl Bm3dParams {
    pub fn builder() -> Bm3dParamsBuilder {
        Bm3dParamsBuilder::default()
    }

    /// Number of source planes expected per channel (`2*radius + 1`).
    pub fn frames_per_channel(&self) -> usize {
        2 * self.radius + 1
    }

    /// Index of the reference ("center") plane within a per-channel stack.
    pub fn center_index(&self) -> usize {
        self.radius
    }
}

/// Builder for [`Bm3dParams`], mirroring the options-builder pattern used
/// for the engine's denoising pass configuration.
#[derive(Debug, Clone)]
pub struct Bm3dParamsBuilder {
    block_step: usize,
    bm_range: usize,
    radius: usize,
    ps_num: usize,
    ps_range: usize,
    sigma: [f32; 3],
    channels: ChannelMode,
    final_pass: bool,
}

impl Default for Bm3dParamsBuilder {
    fn default() -> Self {
        Self {
            block_step: 8,
            bm_range: 16,
            radius: 0,
            ps_num: 2,
            ps_range: 4,
            sigma: [0.0; 3],
            channels: ChannelMode::Luma,
            final_pass: false,
        }
    }
}

impl Bm3dParamsBuilder {
    pub fn block_step(mut self, v: usize) -> Self {
        self.block_step = v;
        self
    }

    pub fn bm_range(mut self, v: usize) -> Self {
        self.bm_range = v;
        self
    }

    pub fn radius(mut self, v: usize) -> Self {
        self.radius = v;
        self
    }

    pub fn ps_num(mut self, v: usize) -> Self {
        self.ps_num = v;
        self
    }

    pub fn ps_range(mut self, v: usize) -> Self {
        self.ps_range = v;
        self
    }

    pub fn sigma(mut self, v: [f32; 3]) -> Self {
        self.sigma = v;
        self
    }

    pub fn sigma_luma(mut self, v: f32) -> Self {
        self.sigma[0] = v;
        self
    }

    pub fn channels(mut self, v: ChannelMode) -> Self {
        self.channels = v;
        self
    }

    pub fn final_pass(mut self, v: bool) -> Self {
        self.final_pass = v;
        self
    }

    pub fn build(self) -> Bm3dResult<Bm3dParams> {
        if self.block_step == 0 || self.block_step > BLOCK_SIZE {
            return Err(Bm3dError::InvalidBlockStep(self.block_step));
        }
        if self.bm_range == 0 {
            return Err(Bm3dError::InvalidBmRange(self.bm_range));
        }
        if self.radius > 0 && (self.ps_num == 0 || self.ps_num > 8) {
            return Err(Bm3dError::InvalidPsNum {
                ps_num: self.ps_num,
            });
        }

        Ok(Bm3dParams {
            block_step: self.block_step,
            bm_range: self.bm_range,
            radius: self.radius,
            ps_num: self.ps_num,
            ps_range: self.ps_range,
            sigma: self.sigma,
            channels: self.channels,
            final_pass: self.final_pass,
        })
    }
}
