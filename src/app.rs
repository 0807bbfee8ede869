//! GTK application construction and run loop entry.

use gio::ApplicationFlags;
use gtk4 as gtk;
use gtk::prelude::*;
use gtk::{Application, ApplicationWindow};

/// Application id registered with GTK/GIO.
pub const APP_ID: &str = "org.agentassistant.Client";

const WINDOW_TITLE: &str = "Agent Assistant";
const DEFAULT_WIDTH: i32 = 1280;
const DEFAULT_HEIGHT: i32 = 720;

fn build_application() -> Application {
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(ApplicationFlags::FLAGS_NONE)
        .build();

    app.connect_activate(|app| {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(DEFAULT_WIDTH)
            .default_height(DEFAULT_HEIGHT)
            .build();
        window.present();
    });

    app
}

/// Constructs the application object and enters the blocking GTK run loop,
/// passing the process argument vector through unmodified.
///
/// Returns the run loop's own exit status; the caller uses it as the
/// process exit code without remapping. The application object is released
/// when this scope ends. The termination-signal path never reaches that
/// release, by design.
pub fn run(args: &[String]) -> i32 {
    let app = build_application();
    tracing::debug!(app_id = APP_ID, "entering GTK run loop");
    let status = app.run_with_args(args);
    tracing::debug!(status = status.value(), "GTK run loop returned");
    status.value()
}
