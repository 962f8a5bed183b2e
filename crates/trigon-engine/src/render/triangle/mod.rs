//! The pulsing, rotating triangle.
//!
//! - `geometry`: the three fixed vertices and their buffer layout
//! - `uniforms`: the per-frame block shared with `shaders/triangle.wgsl`
//! - `animation`: frame-counted time, rotation and pulse
//! - `frame_loop`: the per-frame sequence, independent of the GPU
//! - `renderer`: pipeline + buffers, created once, and the GPU presenter

mod animation;
mod config;
mod frame_loop;
mod geometry;
mod renderer;
mod uniforms;

pub use animation::{Animation, AnimationParams};
pub use config::TriangleConfig;
pub use frame_loop::{DrawCall, Presenter, RenderLoop, TRIANGLE_DRAW};
pub use geometry::{Vertex, TRIANGLE_VERTICES, VERTEX_COUNT};
pub use renderer::{GpuPresenter, TriangleRenderer};
pub use uniforms::Uniforms;
