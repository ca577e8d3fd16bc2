mod app;
mod cli;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Result, anyhow};
use app::HistogramApp;
use clap::Parser;
use cli::Args;
use data::loader::load_file;
use data::model::Extraction;
use data::writer::write_series;
use eframe::egui;
use state::HistogramState;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("\nError: {e:#}! Bailing!\n");
        std::process::exit(-1);
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let input = args.input_path()?;
    let cfg = args.extractor_config()?;
    log::debug!("{args:?}");
    log::debug!("{cfg:?}");

    let extraction = load_file(input, &cfg)?;
    println!("{}", extraction.window);

    write_series(&args.fout, &extraction.series)?;

    if args.hist {
        show_histogram(&extraction)?;
    }
    Ok(())
}

fn show_histogram(extraction: &Extraction) -> Result<()> {
    let state = HistogramState::from_extraction(extraction)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "raw_to_hist – Histogram",
        options,
        Box::new(|_cc| Ok(Box::new(HistogramApp::new(state)))),
    )
    .map_err(|e| anyhow!("histogram window: {e}"))
}
