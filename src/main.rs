//! Failure Predict - sample driver
//!
//! Usage: failure-predict [--json] [config.json]
//!
//! Fits the model from the configured training files, replays the reference
//! machines, then prints (or drains as JSON lines) the queued alerts.

use std::path::PathBuf;
use std::process::ExitCode;

use failure_predict::constants::{APP_NAME, APP_VERSION};
use failure_predict::{FailurePredictor, PredictorConfig};

const USAGE: &str = "Usage: failure-predict [--json] [config.json]";

/// (machine, temperature, disk_errors)
const SAMPLE_MACHINES: &[(&str, i64, i64)] = &[
    ("test01", 100, 0),
    ("test02", 1, 1200),
    ("test03", 50, 50),
    ("test04", 10, 10),
    ("test05", 100, 100),
];

/// Returns (json output, config path)
fn parse_args(args: impl Iterator<Item = String>) -> Result<(bool, Option<PathBuf>), String> {
    let mut json = false;
    let mut config_path: Option<PathBuf> = None;
    for arg in args {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with("--") {
            return Err(format!("Unknown option '{}'", arg));
        } else if config_path.is_some() {
            return Err(format!("Unexpected argument '{}'", arg));
        } else {
            config_path = Some(PathBuf::from(arg));
        }
    }
    Ok((json, config_path))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let (json, config_path) = match parse_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match config_path {
        Some(path) => match PredictorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => PredictorConfig::from_env(),
    };

    let predictor = match FailurePredictor::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Cannot build predictor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for &(name, temperature, disk_errors) in SAMPLE_MACHINES {
        if let Err(e) = predictor.predict(name, temperature, disk_errors) {
            log::error!("Prediction for {} failed: {}", name, e);
        }
    }

    if json {
        let queue = predictor.get_alert_queue();
        while let Some(alert) = queue.pop_alert() {
            match serde_json::to_string(&alert) {
                Ok(line) => println!("{}", line),
                Err(e) => log::error!("Failed to encode alert for {}: {}", alert.name, e),
            }
        }
    } else {
        predictor.print_alerts();
    }
    predictor.clear_alerts();

    ExitCode::SUCCESS
}
