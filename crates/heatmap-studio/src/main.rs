mod app;
mod config;

use heatmap_engine::device::GpuInit;
use heatmap_engine::logging::{init_logging, LoggingConfig};
use heatmap_engine::window::{Runtime, RuntimeConfig};

use app::StudioApp;
use config::StudioConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::default();
    log::info!(
        "radius {} px, point alpha {}, colorize every {:?}",
        config.heatmap.radius,
        config.heatmap.point_alpha,
        config.heatmap.colorize_interval
    );

    let runtime = RuntimeConfig::new(config.title.clone(), config.width, config.height);
    Runtime::run(runtime, GpuInit::default(), StudioApp::new(config))
}
