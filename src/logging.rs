//! Browser console logging and panic reporting.

use std::sync::Once;

static INIT: Once = Once::new();

#[cfg(debug_assertions)]
const LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LEVEL: log::Level = log::Level::Info;

/// Route `log` to the console and panics to `console.error`. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(LEVEL) {
            // Another module on the page already owns the global logger.
            log::debug!("width toggle: keeping existing logger: {err}");
        }
    });
}
