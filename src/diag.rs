//! Deprecation diagnostics for legacy token reads.
//!
//! Reading a numbered legacy color (`blue0`, `gray2`, ...) emits a warning
//! through a process-wide sink. The sink is swappable so applications can
//! route warnings into their own logging pipeline and tests can capture them.

use console::style;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Function invoked with each deprecation message.
pub type WarningSink = fn(&str);

static WARNING_SINK: Lazy<Mutex<WarningSink>> = Lazy::new(|| Mutex::new(stderr_sink));

/// Overrides the sink that receives deprecation warnings.
///
/// The default sink writes a styled line to stderr. Replacing it is useful
/// for tests or for forwarding warnings to an application logger.
///
/// # Example
///
/// ```rust
/// use tokendeck::set_warning_sink;
///
/// set_warning_sink(|message| eprintln!("deprecated: {}", message));
/// ```
pub fn set_warning_sink(sink: WarningSink) {
    let mut guard = WARNING_SINK.lock().unwrap();
    *guard = sink;
}

/// Sends a deprecation message through the current sink.
pub(crate) fn emit_warning(message: &str) {
    let sink = WARNING_SINK.lock().unwrap();
    (*sink)(message)
}

fn stderr_sink(message: &str) {
    eprintln!("{}", style(message).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CAPTURED: AtomicUsize = AtomicUsize::new(0);

    fn counting_sink(_message: &str) {
        CAPTURED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    #[serial(warning_sink)]
    fn test_set_warning_sink_routes_messages() {
        CAPTURED.store(0, Ordering::SeqCst);
        set_warning_sink(counting_sink);

        emit_warning("first");
        emit_warning("second");
        assert_eq!(CAPTURED.load(Ordering::SeqCst), 2);

        set_warning_sink(|_| {});
    }
}
