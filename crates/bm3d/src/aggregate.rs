//! Overlap-add aggregation: every denoised block is scattered into a running
//! weighted sum (`wdst`) and a running weight sum (`weight`); [`finish`]
//! divides the two once every anchor has contributed.

use bm3d_core::consts::BLOCK_AREA;
use bm3d_core::plane::Plane;

/// Add `weight * block` into `wdst` at `(x, y)` and accumulate `weight` into
/// the matching cells of `weight_buf`.
pub fn scatter_add(
    wdst: &mut Plane,
    weight_buf: &mut Plane,
    x: usize,
    y: usize,
    block: &[f32; BLOCK_AREA],
    weight: f32,
) {
    for row in 0..8 {
        for col in 0..8 {
            let px = x + col;
            let py = y + row;
            let v = wdst.at(px, py) + weight * block[row * 8 + col];
            wdst.set(px, py, v);
            let w = weight_buf.at(px, py) + weight;
            weight_buf.set(px, py, w);
        }
    }
}

/// Divide `wdst` by `weight` pixelwise, producing the final plane.
///
/// Every pixel is expected to have been covered by at least one scattered
/// block (the frame driver's anchor schedule guarantees full coverage); a
/// zero weight anywhere is a driver bug, not a recoverable runtime
/// condition.
pub fn finish(wdst: &Plane, weight: &Plane) -> Plane {
    let mut out = Plane::with_stride(wdst.width(), wdst.height(), wdst.stride());
    for y in 0..wdst.height() {
        for x in 0..wdst.width() {
            let w = weight.at(x, y);
            debug_assert!(w > 0.0, "pixel ({x}, {y}) received zero aggregation weight");
            out.set(x, y, wdst.at(x, y) / w);
        }
    }
    out
}
