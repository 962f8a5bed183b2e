use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// One triangle corner: NDC position and straight RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    pub const fn new(position: [f32; 2], color: Color) -> Self {
        Self {
            position,
            color: color.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uploaded once at setup; never written again.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new([0.0, 0.5], Color::RED),
    Vertex::new([-0.5, -0.5], Color::GREEN),
    Vertex::new([0.5, -0.5], Color::BLUE),
];

/// Every draw submits exactly this many vertices.
pub const VERTEX_COUNT: u32 = TRIANGLE_VERTICES.len() as u32;
