//! Reusable buffer pool for per-frame scratch allocations
//!
//! A collaborator driving many frames through the engine would otherwise pay
//! an allocation for every plane-sized `wdst`/`weight` pair and every 8x8x8
//! group cube. This pool lets it recycle those buffers across frames.

use std::sync::Mutex;

use crate::consts::GROUP_VOLUME;

/// Pool of reusable buffers keyed by the plane size the pool was created for.
pub struct BufferPool {
    channel_f32: Mutex<Vec<Vec<f32>>>,
    group_f32: Mutex<Vec<[f32; GROUP_VOLUME]>>,
    width: usize,
    height: usize,
}

impl BufferPool {
    /// Create a new buffer pool for the given plane dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            channel_f32: Mutex::new(Vec::new()),
            group_f32: Mutex::new(Vec::new()),
            width,
            height,
        }
    }

    /// Get a plane-sized, zeroed `f32` buffer (`width * height`).
    pub fn get_channel_f32(&self) -> Vec<f32> {
        let mut pool = self.channel_f32.lock().unwrap();
        match pool.pop() {
            Some(mut buf) => {
                buf.clear();
                buf.resize(self.width * self.height, 0.0);
                buf
            }
            None => vec![0.0; self.width * self.height],
        }
    }

    /// Return a plane-sized buffer to the pool.
    pub fn return_channel_f32(&self, buf: Vec<f32>) {
        let mut pool = self.channel_f32.lock().unwrap();
        if pool.len() < 8 {
            pool.push(buf);
        }
    }

    /// Get a zeroed group cube buffer (8x8x8, `GROUP_VOLUME` floats).
    pub fn get_group_f32(&self) -> [f32; GROUP_VOLUME] {
        let mut pool = self.group_f32.lock().unwrap();
        pool.pop().unwrap_or([0.0; GROUP_VOLUME])
    }

    /// Return a group cube buffer to the pool.
    pub fn return_group_f32(&self, buf: [f32; GROUP_VOLUME]) {
        let mut pool = self.group_f32.lock().unwrap();
        if pool.len() < 16 {
            pool.push(buf);
        }
    }

    /// Dimensions this pool was created for.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Drop all pooled buffers, freeing their memory.
    pub fn clear(&self) {
        self.channel_f32.lock().unwrap().clear();
        self.group_f32.lock().unwrap().clear();
    }
}
