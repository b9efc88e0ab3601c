#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{App, Arg};
use interaxplot_core::render::render_to_file;
use interaxplot_core::report::{load_graph, ReportFiles};
use simplelog::{LevelFilter, SimpleLogger, TermLogger};

use crate::settings::Settings;

fn init_logging(debug: bool) {
    let log_filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("interaxplot")
        .build();

    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger", e);
        if let Err(e_simple) = SimpleLogger::init(log_filter, log_config) {
            eprintln!("Simple logging failed too: {}", e_simple);
        }
    }

    debug!("Logging with level {}", log_filter);
}

fn run(data_dir: &Path, settings: &Settings) -> Result<()> {
    let files = ReportFiles::in_dir(
        data_dir,
        &settings.input.agent_report,
        &settings.input.interaction_report,
    );
    let graph = load_graph(&files)
        .with_context(|| format!("Could not load reports from {}", data_dir.display()))?;
    if graph.is_empty() {
        warn!("No agents or interactions found, the image will be empty");
    }

    render_to_file(&graph, &settings.render, &settings.output.file).with_context(|| {
        format!(
            "Could not render graph to {}",
            settings.output.file.display()
        )
    })?;
    Ok(())
}

fn main() {
    let matches = App::new("interaxplot")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Renders the agent interaction reports as a circular graph image.")
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .help("Configuration file location")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Location of the PNG file to create")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("DATA_DIR")
                .help("directory containing the agent and interaction reports")
                .env("INTERAXPLOT_DATA_DIR")
                .required(true)
                .index(1),
        )
        .get_matches();

    // Load configuration file(s)
    let mut settings = match Settings::with_file(matches.value_of_lossy("config")) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Could not load configuration: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(matches.is_present("debug") || settings.logging.debug);

    if let Some(output) = matches.value_of_os("output") {
        settings.output.file = PathBuf::from(output);
    }

    let dir = matches
        .value_of_os("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_default();
    if !dir.is_dir() {
        eprintln!("Must give a valid directory as argument");
        std::process::exit(3);
    }

    if let Err(e) = run(&dir, &settings) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
