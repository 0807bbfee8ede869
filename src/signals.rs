//! Termination signal handling.
//!
//! Forced shutdown through the toolkit's cleanup path is known to crash
//! (GTK teardown racing the embedded engine), turning a plain Ctrl+C into a
//! core dump. The handlers installed here trade graceful shutdown for a
//! deterministic one: `_exit(0)` immediately, no destructors, no unwinding,
//! no toolkit shutdown. The OS reclaims all process resources.
//!
//! The handler may run on any thread. It is async-signal-safe: no
//! allocation, no locks, no shared state, a single non-returning call.

/// Exits the process immediately, bypassing all cleanup.
extern "C" fn on_termination_signal(_signum: libc::c_int) {
    unsafe { libc::_exit(0) }
}

/// Registers [`on_termination_signal`] for `SIGINT` and `SIGTERM`.
pub fn install_termination_handlers() {
    unsafe {
        libc::signal(libc::SIGINT, on_termination_signal as libc::sighandler_t);
        libc::signal(libc::SIGTERM, on_termination_signal as libc::sighandler_t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed_handler(signum: libc::c_int) -> libc::sighandler_t {
        unsafe {
            let mut current: libc::sigaction = std::mem::zeroed();
            libc::sigaction(signum, std::ptr::null(), &mut current);
            current.sa_sigaction
        }
    }

    #[test]
    fn handlers_are_registered_for_both_signals() {
        install_termination_handlers();
        let expected = on_termination_signal as libc::sighandler_t;
        assert_eq!(installed_handler(libc::SIGINT), expected);
        assert_eq!(installed_handler(libc::SIGTERM), expected);
    }
}
