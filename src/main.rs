use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rust_i18n::t;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod i18n;
mod input;
mod output;
mod pipeline;
mod splitter;
mod ui;

use cli::Cli;
use crate::config::Settings;
use error::SplitError;
use i18n::LabelStyle;
use input::InputWalker;
use pipeline::SplitRequest;
use splitter::PresetCatalog;
use ui::{theme, wizard};

// Define locales
rust_i18n::i18n!("locales", fallback = "ko");

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red(), err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let mut settings = Settings::new(cli.config.as_deref()).context("loading settings")?;
    if let Some(lang) = &cli.lang {
        settings.language = lang.clone();
    }
    i18n::set_locale(&settings.language);

    let catalog = PresetCatalog::new(&settings.presets);

    if cli.list_presets {
        let presets: Vec<_> = catalog.iter().collect();
        theme::print_presets(&presets, &settings.default_preset);
        return Ok(true);
    }

    if cli.is_interactive() {
        return run_interactive(&settings, &catalog);
    }

    let preset = cli.preset.as_deref().unwrap_or(&settings.default_preset);
    let pattern = catalog.resolve_pattern(cli.pattern.as_deref(), preset)?;
    let group_size = cli.group_size.unwrap_or(settings.group_size);

    let mut request = SplitRequest::new(pattern, group_size, LabelStyle::from_settings(&settings))?;
    request.output_dir = cli.output_dir.or(settings.output_dir.clone());
    request.keep_preface = cli.keep_preface || settings.keep_preface;
    request.dry_run = cli.dry_run;

    let inputs = InputWalker::expand(&cli.inputs);
    if inputs.is_empty() {
        return Err(SplitError::InputUnavailable {
            path: PathBuf::from(cli.inputs.join(" ")),
            source: io::Error::new(io::ErrorKind::NotFound, t!("no_inputs").to_string()),
        }
        .into());
    }

    let report = pipeline::run(&inputs, &request)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        for doc in &report.documents {
            theme::print_document(doc, request.group_size, request.dry_run);
        }
        theme::print_summary(&report, &theme::create_skin());
    }

    Ok(report.success())
}

fn run_interactive(settings: &Settings, catalog: &PresetCatalog) -> Result<bool> {
    let Some(choice) = wizard::run_wizard(catalog)? else {
        return Ok(false);
    };

    println!("{}", theme::rule().blue());
    println!("{}", t!("split_start"));
    println!("{}", theme::rule().blue());

    let mut request = SplitRequest::new(&choice.pattern, choice.group_size, LabelStyle::from_settings(settings))?;
    request.keep_preface = settings.keep_preface;

    let report = pipeline::run(&[choice.input], &request)?;
    for doc in &report.documents {
        theme::print_document(doc, request.group_size, false);
    }
    theme::print_summary(&report, &theme::create_skin());

    wizard::wait_for_enter();
    Ok(report.success())
}
