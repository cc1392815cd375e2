use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use simple_logger::SimpleLogger;

use lattice_automaton::sink::{AsciiSink, PointCloudSink, Sink};
use lattice_automaton::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .context("failed to initialise logger")?;

    info!(
        "Starting lattice-automaton v{} ...",
        env!("CARGO_PKG_VERSION")
    );
    debug!("{:?}", config);

    let mut driver = config
        .build_driver()
        .context("invalid lattice configuration")?;

    let mut ascii = AsciiSink::new(std::io::stdout().lock(), config.blank);
    let mut point_cloud = PointCloudSink::new(&config.output_dir);

    let mut sinks: Vec<&mut dyn Sink> = Vec::new();
    if !config.no_ascii {
        sinks.push(&mut ascii);
    }
    if !config.no_point_cloud {
        sinks.push(&mut point_cloud);
    }

    driver
        .run(config.ticks, &mut sinks)
        .context("lattice run aborted")?;

    info!("Done after {} ticks", config.ticks);
    Ok(())
}
