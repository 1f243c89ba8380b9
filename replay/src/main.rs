use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;
use replay::driver::Replayer;
use replay::io;
use replay::io::cli::Cli;
use replay::io::output::ReplayOutput;
use starform::io::svg::session_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] successfully parsed ReplayConfig: {config:?}");

    let script_stem = args
        .script_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("script file has no valid file stem")?
        .to_owned();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let script = io::read_script(&args.script_file)?;
    let mut replayer = Replayer::new(&script, config.clone())?;

    let output_folder = args.output_folder.as_path();
    let draw_options = config.svg_draw_options.clone();
    let stats = replayer.run(&script, |tick, session| {
        let svg_path = output_folder.join(format!("frame_{script_stem}_{tick:0>5}.svg"));
        let svg = session_to_svg(session, &draw_options, &format!("tick {tick}"));
        io::write_svg(&svg, &svg_path)
    })?;
    info!("[MAIN] replay finished: {stats:?}");

    {
        let output = ReplayOutput {
            config: config.clone(),
            session: starform::io::export(&replayer.session),
            stats,
        };
        let output_path = output_folder.join(format!("final_{script_stem}.json"));
        io::write_json(&output, Path::new(&output_path))?;
    }

    {
        let svg_path = output_folder.join(format!("final_{script_stem}.svg"));
        let svg = session_to_svg(&replayer.session, &config.svg_draw_options, &script_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
