//! Linux host process entry point for the Agent Assistant desktop client.
//!
//! The bootstrap is strictly linear: prepare the environment, install the
//! GLib log filter, install termination-signal handlers, initialize the
//! runner's own diagnostics, then hand control to the GTK run loop. The run
//! loop's exit status becomes the process exit code. A termination signal
//! at any point after handler installation exits the process immediately
//! instead, bypassing all cleanup.

mod app;
mod config;
mod environment;
mod error;
mod glib_log;
mod logging;
mod signals;

use config::RunnerConfig;

fn main() {
    // Ordering matters up to the run loop: GTK_MODULES must be set before
    // GTK initialization, and the filter must be in place before any
    // toolkit code can log.
    environment::prepare();
    glib_log::install_filter();
    signals::install_termination_handlers();

    let config = match RunnerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init_minimal_logging();
            tracing::warn!(
                "Failed to load runner configuration, using defaults: {}",
                e
            );
            RunnerConfig::default()
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        logging::init_minimal_logging();
        tracing::warn!("Falling back to minimal logging: {}", e);
    }

    let args: Vec<String> = std::env::args().collect();
    std::process::exit(app::run(&args));
}
