use swatch::{app, config::StopwatchConfig, error, logging};

fn main() {
    logging::init();

    if let Err(e) = app::run_interactive(StopwatchConfig::orbit()) {
        tracing::error!(error = %e, "stopwatch failed");
        eprintln!("swatch-orbit: {}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
