//! Process environment preparation.
//!
//! Must run before any GTK initialization: GTK reads `GTK_MODULES` when the
//! toolkit comes up, and an empty value keeps it from attempting to load
//! `appmenu-gtk-module`, which fails noisily on most distributions.

use std::env;

/// Forces `GTK_MODULES` to the empty string, overwriting any prior value.
///
/// Cannot fail observably; a stale value only re-enables a warning the log
/// filter suppresses anyway.
pub fn prepare() {
    env::set_var("GTK_MODULES", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtk_modules_is_forced_empty() {
        env::set_var("GTK_MODULES", "canberra-gtk-module");
        prepare();
        assert_eq!(env::var("GTK_MODULES").as_deref(), Ok(""));
    }
}
