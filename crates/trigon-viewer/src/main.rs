mod view;

use anyhow::Result;

use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::triangle::TriangleConfig;
use trigon_engine::window::{Runtime, RuntimeConfig};

use crate::view::TriangleView;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon: pulsing triangle".to_string(),
        ..RuntimeConfig::default()
    };

    log::info!("starting `{}` at {:?} fps", config.title, config.preferred_fps);

    Runtime::run(config, GpuInit::default(), TriangleView::new(TriangleConfig::default()))
}
