/// Setup-time context for creating renderer resources (device + surface format).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub surface_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            surface_format,
        }
    }
}

/// Target for drawing (encoder + color view of the acquired drawable).
///
/// `load` is what the first pass should do with the attachment; the host sets
/// it to clear with the frame's background color.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub load: wgpu::LoadOp<wgpu::Color>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        load: wgpu::LoadOp<wgpu::Color>,
    ) -> Self {
        Self {
            encoder,
            color_view,
            load,
        }
    }
}

/// What happened to one frame after the drawable was requested.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were submitted and the drawable presented.
    Presented,
    /// No drawable was available; nothing was drawn.
    Skipped,
    /// The surface cannot recover; the host should shut down.
    Fatal,
}
