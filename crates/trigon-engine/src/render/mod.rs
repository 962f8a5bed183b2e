//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers), create them once
//! and record into a `RenderTarget` handed out per frame.
//!
//! Convention:
//! - geometry is authored in normalized device coordinates (+Y up)
//! - uniforms are plain `#[repr(C)]` structs uploaded with `bytemuck`

mod ctx;
pub mod triangle;

pub use ctx::{FrameOutcome, RenderCtx, RenderTarget};
