use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::ReplayConfig;
use crate::script::ExtScript;

pub mod cli;
pub mod output;

pub fn read_script(path: &Path) -> Result<ExtScript> {
    let file = File::open(path).with_context(|| format!("could not open script file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse script file: {}", path.display()))
}

/// Reads the config file if one is given, falls back to [`ReplayConfig::default`] otherwise.
pub fn read_config(path: Option<&Path>) -> Result<ReplayConfig> {
    let config: ReplayConfig = match path {
        None => {
            warn!("[IO] no config file provided, use --config-file to provide a custom config");
            ReplayConfig::default()
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };
    config.validate()?;
    Ok(config)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "[IO] output written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[EPOCH]: {}", jiff::Zoned::now());
    Ok(())
}
