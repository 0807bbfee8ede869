//! GLib log filtering.
//!
//! The toolkit stack emits a handful of warnings that are benign for this
//! application but alarming to users reading the terminal. This module
//! replaces the process-wide GLib default log handler with a wrapper that
//! drops messages containing one of a fixed set of known-benign substrings
//! and forwards everything else, unchanged, to the previous default
//! handler.
//!
//! Matching is literal on purpose: if the third-party wording changes, the
//! filter stops matching and the warning shows again. That is an accepted
//! limitation, preferable to pattern inference silently eating messages it
//! should not.

/// Message fragments identifying known-benign warnings: the appindicator
/// deprecation notice, the appmenu GTK module load warning, and the
/// engine's implicit-view removal warning.
const SUPPRESSED_MESSAGE_FRAGMENTS: [&str; 3] = [
    "libayatana-appindicator is deprecated",
    "appmenu-gtk-module",
    "The implicit view cannot be removed",
];

/// Returns `true` if the message matches one of the known-benign warnings
/// and should be dropped.
pub fn should_suppress(message: &str) -> bool {
    SUPPRESSED_MESSAGE_FRAGMENTS
        .iter()
        .any(|fragment| message.contains(fragment))
}

/// Installs the filtering wrapper as the GLib default log handler.
///
/// Must be called before any toolkit code runs so no warning escapes
/// unfiltered. The installation is process-wide and permanent; there is no
/// restore-on-exit.
pub fn install_filter() {
    glib::log_set_default_handler(|domain, level, message| {
        if should_suppress(message) {
            return;
        }
        glib::log_default_handler(domain, level, Some(message));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_appindicator_deprecation() {
        assert!(should_suppress(
            "libayatana-appindicator is deprecated, blah"
        ));
    }

    #[test]
    fn suppresses_appmenu_module_warning() {
        assert!(should_suppress(
            "Failed to load module 'appmenu-gtk-module'"
        ));
    }

    #[test]
    fn suppresses_implicit_view_warning() {
        assert!(should_suppress("The implicit view cannot be removed"));
    }

    #[test]
    fn forwards_everything_else() {
        assert!(!should_suppress("Window created"));
        assert!(!should_suppress(""));
        // Close but not literal matches still pass through.
        assert!(!should_suppress("libayatana-appindicator is old"));
        assert!(!should_suppress("appmenu gtk module"));
    }
}
