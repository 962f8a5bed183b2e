use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-frame block read by both shader stages.
///
/// Layout mirrors the WGSL `Uniforms` struct: a column-major `mat4x4<f32>` at
/// offset 0, two `f32` at 64 and 68, then padding up to the struct's 16-byte
/// alignment (80 bytes total).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub transform: [[f32; 4]; 4],
    pub elapsed_time: f32,
    pub scale: f32,
    pub _pad: [f32; 2],
}

impl Uniforms {
    /// Size of the GPU buffer holding one block.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(transform: Mat4, elapsed_time: f32, scale: f32) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            elapsed_time,
            scale,
            _pad: [0.0; 2],
        }
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.transform)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
