mod analyzer;
mod config;
mod report;

use tracing_subscriber::EnvFilter;

use crate::analyzer::{FileLineSource, run_analysis};
use crate::config::{Config, load_config};
use crate::report::ConsoleSink;

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "config.toml";

fn main() {
    init_json_logging();

    let config: Config = if std::path::Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(config) => config,
            Err(error) => {
                log::error!("Configuration error: {}", error);
                std::process::exit(1);
            }
        }
    } else {
        log::info!("{} not found, using built-in defaults", CONFIG_PATH);
        Config::default()
    };

    // An explicit path argument beats the configured one.
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.input_path.clone());

    log::info!("Logsleuth is starting... input={}", input_path);

    let mut source = FileLineSource::new(&input_path);
    let mut sink = ConsoleSink;

    if let Err(error) = run_analysis(&config, &mut source, &mut sink) {
        log::error!("analysis failed: {}", error);
        std::process::exit(1);
    }
}
