//! Shared helpers for WASM API operations

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the panic hook and console logger on first use.
///
/// Called by every exported function, so hosts never need a separate
/// initialization step.
pub fn ensure_initialized() {
    INIT.call_once(|| {
        #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))]
        console_error_panic_hook::set_once();

        #[cfg(all(feature = "console_log", target_arch = "wasm32"))]
        {
            if console_log::init_with_level(log::Level::Info).is_err() {
                log::warn!("logger already installed, keeping the existing one");
            }
        }
    });
}
