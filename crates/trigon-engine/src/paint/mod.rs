//! Color model shared by the host and the renderers.

pub mod color;

pub use color::Color;
