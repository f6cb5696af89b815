//! Customer Churn Predictor - Main Entry Point
//!
//! Loads the trained artifact once, then runs the interactive
//! form → encode → predict loop until the user quits.

mod constants;
mod error;
mod logic;
mod ui;

use std::path::Path;

use clap::Parser;

use constants::{APP_NAME, APP_VERSION};
use logic::features::encoder;
use logic::model::ChurnModel;
use logic::risk::classifier;
use logic::risk::recommend;
use ui::display::Display;
use ui::form;

#[derive(Parser, Debug)]
#[command(name = "Customer Churn Predictor")]
#[command(about = "Interactive churn-risk scoring over a pre-trained model")]
struct Args {
    /// Path to the model artifact (JSON)
    #[arg(short, long)]
    model: Option<String>,

    /// Show the encoded features and per-feature impacts with each prediction
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let display = Display::new();
    let model_path = args
        .model
        .clone()
        .unwrap_or_else(constants::get_model_path);

    // Loaded once; read-only for the rest of the process
    let model = match ChurnModel::load(Path::new(&model_path)) {
        Ok(model) => model,
        Err(e) => {
            display.error_report(&e)?;
            return Err(Box::new(e));
        }
    };

    display.banner(&model)?;
    display.model_summary(&model)?;

    loop {
        let Some(raw) = form::collect()? else {
            break;
        };

        let vector = encoder::encode(&raw, model.schema());
        log::debug!("encoded vector: {}", vector.to_log_entry(model.schema()));

        match classifier::predict(&vector, &model) {
            Ok(result) => {
                log::info!(
                    "prediction: tier={} probability={:.3}",
                    result.tier,
                    result.probability
                );
                display.prediction(&result)?;
                if args.debug {
                    let impacts = recommend::impacts(&vector, &model);
                    display.analysis(&vector, model.schema(), &impacts)?;
                }
            }
            Err(e) => display.error_report(&e)?,
        }
    }

    log::info!("Session ended");
    Ok(())
}
