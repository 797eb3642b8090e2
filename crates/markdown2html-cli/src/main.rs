use anyhow::{Context, Result};
use markdown2html_config::Config;
use markdown2html_engine::{TransformOptions, io};
use std::{env, path::Path, path::PathBuf, process};

/// Input and output paths taken from exactly two positional arguments.
fn paths_from_args(args: &[String]) -> Option<(PathBuf, PathBuf)> {
    match args {
        [_, input, output] => Some((PathBuf::from(input), PathBuf::from(output))),
        _ => None,
    }
}

fn transform_options(config: Option<Config>) -> TransformOptions {
    config
        .map(|config| config.transform_options())
        .unwrap_or_default()
}

fn convert(input: &Path, output: &Path, options: &TransformOptions) -> Result<()> {
    io::convert_file(input, output, options).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            input.display(),
            output.display()
        )
    })
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown2html");

    let Some((input, output)) = paths_from_args(&args) else {
        eprintln!("Usage: {program} README.md README.html");
        process::exit(1);
    };

    // Check the input before anything else so a bad path never touches the output
    if let Err(e) = io::validate_input_file(&input) {
        eprintln!("{e}");
        process::exit(1);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!(
                "Fix or remove {} (or point {} elsewhere)",
                Config::config_path().display(),
                markdown2html_config::CONFIG_PATH_ENV
            );
            process::exit(1);
        }
    };
    if config.is_some() {
        log::debug!("Using config file {}", Config::config_path().display());
    }

    let options = transform_options(config);
    if options != TransformOptions::default() {
        log::info!(
            "Config file {} changes output formatting: list_indent = {}",
            Config::config_path().display(),
            options.list_indent
        );
    }

    if let Err(e) = convert(&input, &output, &options) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    log::info!("Converted {} to {}", input.display(), output.display());
}
