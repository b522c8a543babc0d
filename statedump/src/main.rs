#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::if_then_some_else_none)]

use std::time::Instant;

use log::LevelFilter;

use statedump::{DumpError, Output};
use statedump_config::{logging::LoggingConfig, DumpConfiguration, LoadTomlConfiguration};
use statedump_source::SnapshotSource;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logger(config: &LoggingConfig) {
    if config.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !config.timestamp {
            logger = logger.without_timestamps();
        }

        if config.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(config.level));

        logger = logger.with_colors(config.color);
        if let Err(err) = logger.init() {
            eprintln!("Couldn't install logger: {err}");
        }
    }
}

const fn convert_logger_filter(level: statedump_config::logging::LevelFilter) -> LevelFilter {
    match level {
        statedump_config::logging::LevelFilter::Off => LevelFilter::Off,
        statedump_config::logging::LevelFilter::Error => LevelFilter::Error,
        statedump_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        statedump_config::logging::LevelFilter::Info => LevelFilter::Info,
        statedump_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        statedump_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

fn run(config: &DumpConfiguration) -> Result<(), DumpError> {
    let time = Instant::now();

    log::info!("Starting statedump {CARGO_PKG_VERSION}");
    log::info!("Reading snapshot {}", config.source.snapshot.display());
    let source = SnapshotSource::open(&config.source.snapshot)?;

    // Nothing reaches the output until both tables rendered cleanly.
    let mut buffer: Vec<u8> = Vec::new();
    let summary = statedump::render(&source, &mut buffer)?;

    log::info!(
        "Rendered {} biomes and {} block states",
        summary.biomes,
        summary.resolved_blocks
    );
    if summary.diagnostics > 0 {
        log::warn!(
            "{} blocks could not be resolved and were written as comments",
            summary.diagnostics
        );
    }

    let output = Output::from(&config.output);
    output.publish(&buffer).map_err(DumpError::Publish)?;

    log::info!(
        "Wrote {} bytes to {output}, took {}ms",
        buffer.len(),
        time.elapsed().as_millis()
    );
    Ok(())
}

fn main() {
    let config = DumpConfiguration::load();
    match &config {
        Ok(config) => init_logger(&config.logging),
        Err(_) => init_logger(&LoggingConfig::default()),
    }

    if let Err(err) = config.map_err(DumpError::from).and_then(|config| run(&config)) {
        err.log();
        std::process::exit(err.exit_code());
    }
}
