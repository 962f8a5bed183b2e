use anyhow::Result;

use trigon_engine::core::{App, AppControl, FrameCtx, StartCtx};
use trigon_engine::render::triangle::{Animation, GpuPresenter, RenderLoop, TriangleConfig, TriangleRenderer};
use trigon_engine::render::FrameOutcome;

/// How often (in frames) the measured frame rate is logged at debug level.
const FPS_LOG_INTERVAL: u64 = 600;

/// Host view: owns the triangle renderer and drives it once per redraw.
pub struct TriangleView {
    config: TriangleConfig,
    renderer: Option<TriangleRenderer>,
    frame_loop: RenderLoop,
}

impl TriangleView {
    pub fn new(config: TriangleConfig) -> Self {
        let frame_loop = RenderLoop::new(Animation::new(config.animation));
        Self {
            config,
            renderer: None,
            frame_loop,
        }
    }
}

impl App for TriangleView {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()> {
        let size = ctx.gpu.size();
        log::info!(
            "window {:?}: {}x{} on {}",
            ctx.window.id,
            size.width,
            size.height,
            ctx.gpu.adapter_info().name
        );

        let renderer = TriangleRenderer::new(&ctx.render_ctx())?;
        log::info!("triangle ready ({:?})", renderer.format());
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        let time = ctx.time;
        let mut presenter = GpuPresenter::new(renderer, ctx, self.config.clear_color);

        match self.frame_loop.frame(&mut presenter) {
            FrameOutcome::Fatal => {
                log::error!(
                    "stopping after {} presented frames",
                    self.frame_loop.presented_frames()
                );
                return AppControl::Exit;
            }
            FrameOutcome::Presented | FrameOutcome::Skipped => {}
        }

        if time.frame_index > 0 && time.frame_index % FPS_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: {:.1} fps, {} dropped",
                time.frame_index,
                time.fps(),
                self.frame_loop.dropped_frames()
            );
        }

        AppControl::Continue
    }
}
