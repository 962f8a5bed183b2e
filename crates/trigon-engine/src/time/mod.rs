//! Time subsystem.
//!
//! Wall-clock utilities for the host loop:
//! - `FrameClock` measures real frame-to-frame time (diagnostics only)
//! - `FramePacer` schedules redraws at a preferred rate
//!
//! Animation does not read these; it advances by a fixed step per rendered frame.

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
