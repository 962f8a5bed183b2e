//! trigon engine crate.
//!
//! Platform + GPU runtime and the triangle renderer it hosts.

pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
