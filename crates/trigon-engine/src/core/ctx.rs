use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::paint::Color;
use crate::render::{FrameOutcome, RenderCtx, RenderTarget};
use crate::time::FrameTime;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Context passed once to `core::App::on_start`.
pub struct StartCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl<'a, 'w> StartCtx<'a, 'w> {
    /// Device and surface format for creating GPU resources.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(self.gpu.device(), self.gpu.surface_format())
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next drawable, calls `draw` with a [`RenderTarget`] set to
    /// clear with `clear`, then submits and presents.
    ///
    /// When no drawable can be acquired `draw` is not called and the frame is
    /// reported as `Skipped` (or `Fatal` if the surface cannot recover).
    pub fn render<F>(&mut self, clear: Color, draw: F) -> FrameOutcome
    where
        F: FnOnce(&mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if !action.is_recoverable() {
                    log::error!("surface lost for good ({action:?})");
                    return FrameOutcome::Fatal;
                }
                return FrameOutcome::Skipped;
            }
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let load = wgpu::LoadOp::Clear(clear.to_wgpu());
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, load);
            draw(&mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        FrameOutcome::Presented
    }
}
