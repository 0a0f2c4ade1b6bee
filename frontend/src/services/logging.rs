use shared::FormsConfig;
use std::cell::Cell;

thread_local! {
    static DEBUG_ENABLED: Cell<bool> = Cell::new(false);
}

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Debug lines are dropped unless enabled (see `FormsConfig::enable_debug_logging`)
    pub fn set_debug_enabled(enabled: bool) {
        DEBUG_ENABLED.with(|flag| flag.set(enabled));
    }

    /// Take the debug switch from the config the forms were rendered with
    pub fn apply_config(config: &FormsConfig) {
        Self::set_debug_enabled(config.enable_debug_logging);
    }

    pub fn debug_enabled() -> bool {
        DEBUG_ENABLED.with(|flag| flag.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        if Self::debug_enabled() {
            gloo::console::debug!(Self::format_line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::format_line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format_line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format_line(component, message));
    }

    fn format_line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
