use std::ops::Range;

use crate::render::FrameOutcome;

use super::{Animation, Uniforms, VERTEX_COUNT};

/// A non-indexed draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl DrawCall {
    #[inline]
    pub fn vertices(&self) -> Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }
}

/// The only draw the triangle ever issues.
pub const TRIANGLE_DRAW: DrawCall = DrawCall {
    first_vertex: 0,
    vertex_count: VERTEX_COUNT,
};

/// Sink for one frame's GPU work.
///
/// `write_uniforms` is always called before `present`. `present` acquires the
/// drawable, records the draw and submits; it reports `Skipped` when no drawable
/// is available.
pub trait Presenter {
    fn write_uniforms(&mut self, uniforms: &Uniforms);

    fn present(&mut self, draw: DrawCall) -> FrameOutcome;
}

/// Drives the triangle one frame per call.
///
/// Order per frame: advance the animation, upload uniforms, then ask for a
/// drawable. The animation therefore advances on skipped frames as well.
#[derive(Debug, Default)]
pub struct RenderLoop {
    animation: Animation,
    presented: u64,
    dropped: u64,
}

impl RenderLoop {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            presented: 0,
            dropped: 0,
        }
    }

    #[inline]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    #[inline]
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Frames for which no drawable was available.
    #[inline]
    pub fn dropped_frames(&self) -> u64 {
        self.dropped
    }

    pub fn frame<P>(&mut self, presenter: &mut P) -> FrameOutcome
    where
        P: Presenter + ?Sized,
    {
        let uniforms = self.animation.advance();
        presenter.write_uniforms(&uniforms);

        let outcome = presenter.present(TRIANGLE_DRAW);
        match outcome {
            FrameOutcome::Presented => self.presented += 1,
            FrameOutcome::Skipped => {
                self.dropped += 1;
                if self.dropped == 1 {
                    log::debug!("no drawable for frame {}; skipping", self.animation.frames());
                } else {
                    log::trace!("frame {} skipped ({} total)", self.animation.frames(), self.dropped);
                }
            }
            FrameOutcome::Fatal => {}
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls; hands out a drawable only when `available` is set.
    #[derive(Default)]
    struct Recorder {
        available: bool,
        writes: Vec<Uniforms>,
        draws: Vec<DrawCall>,
        calls: Vec<&'static str>,
    }

    impl Recorder {
        fn available() -> Self {
            Self {
                available: true,
                ..Self::default()
            }
        }
    }

    impl Presenter for Recorder {
        fn write_uniforms(&mut self, uniforms: &Uniforms) {
            self.calls.push("write");
            self.writes.push(*uniforms);
        }

        fn present(&mut self, draw: DrawCall) -> FrameOutcome {
            self.calls.push("present");
            if !self.available {
                return FrameOutcome::Skipped;
            }
            self.draws.push(draw);
            FrameOutcome::Presented
        }
    }

    #[test]
    fn every_draw_is_three_vertices_from_zero() {
        let mut lp = RenderLoop::default();
        let mut rec = Recorder::available();
        for _ in 0..500 {
            assert_eq!(lp.frame(&mut rec), FrameOutcome::Presented);
        }

        assert_eq!(rec.draws.len(), 500);
        assert!(rec.draws.iter().all(|d| d.vertices() == (0..3)));
        assert_eq!(lp.presented_frames(), 500);
    }

    #[test]
    fn uniforms_are_written_before_the_drawable_is_requested() {
        let mut lp = RenderLoop::default();
        let mut rec = Recorder::available();
        lp.frame(&mut rec);
        lp.frame(&mut rec);
        assert_eq!(rec.calls, ["write", "present", "write", "present"]);
    }

    #[test]
    fn first_upload_already_carries_one_step() {
        let mut lp = RenderLoop::default();
        let mut rec = Recorder::available();
        lp.frame(&mut rec);
        assert!((rec.writes[0].elapsed_time - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn skipped_frames_still_advance_animation() {
        let mut lp = RenderLoop::default();
        let mut rec = Recorder::default();

        for _ in 0..10 {
            assert_eq!(lp.frame(&mut rec), FrameOutcome::Skipped);
        }

        assert!(rec.draws.is_empty());
        assert_eq!(rec.writes.len(), 10);
        assert_eq!(lp.dropped_frames(), 10);
        assert_eq!(lp.presented_frames(), 0);
        assert!((lp.animation().elapsed() - 10.0 / 60.0).abs() < 1e-9);
        assert!((lp.animation().rotation() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn skipping_does_not_disturb_the_timeline() {
        let mut interrupted = RenderLoop::default();
        let mut steady = RenderLoop::default();
        let mut rec = Recorder::available();
        let mut ok = Recorder::available();

        for n in 0..75 {
            rec.available = n % 4 != 0;
            interrupted.frame(&mut rec);
            steady.frame(&mut ok);
        }

        assert_eq!(rec.writes.last(), ok.writes.last());
        assert_eq!(interrupted.dropped_frames(), 19);
        assert_eq!(interrupted.presented_frames() + interrupted.dropped_frames(), 75);
    }

    #[test]
    fn seventy_five_frames_end_to_end() {
        let mut lp = RenderLoop::default();
        let mut rec = Recorder::available();
        for _ in 0..75 {
            lp.frame(&mut rec);
        }

        let last = rec.writes.last().copied().unwrap();
        assert!((last.elapsed_time - 1.25).abs() < 1e-5);
        assert!((last.scale - 1.189_796).abs() < 1e-4);

        let angle = lp.animation().rotation().rem_euclid(std::f64::consts::TAU);
        assert!((angle - 1.5).abs() < 1e-9);
    }

    #[test]
    fn fatal_outcome_is_passed_through() {
        struct Lost;
        impl Presenter for Lost {
            fn write_uniforms(&mut self, _: &Uniforms) {}
            fn present(&mut self, _: DrawCall) -> FrameOutcome {
                FrameOutcome::Fatal
            }
        }

        let mut lp = RenderLoop::default();
        assert_eq!(lp.frame(&mut Lost), FrameOutcome::Fatal);
        assert_eq!(lp.dropped_frames(), 0);
    }
}
