mod app;
mod config;

use anyhow::Result;

use spincube_engine::logging::{init_logging, LoggingConfig};
use spincube_engine::window::Runtime;

use crate::app::SpinningCube;
use crate::config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::info!(
        "spinning cube: {:.2} rad/s about {:?}, exit with {}",
        config.spin.speed,
        config.spin.axis.to_array(),
        config.exit_key
    );

    let (runtime, gpu_init) = (config.runtime.clone(), config.gpu.clone());
    Runtime::run(runtime, gpu_init, SpinningCube::new(config))
}
