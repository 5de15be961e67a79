//! Logging utilities with colored module prefixes.
//!
//! Provides:
//! - `log!` macro for formatted output with colored prefixes
//! - `debug!` macro gated on the global verbose flag
//!
//! # Example
//!
//! ```ignore
//! log!("schema"; "skipping review: {}", err);
//! debug!("config"; "unknown key '{}'", path);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by the embedding application)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold().to_string(),
        "warn" => prefix.bright_yellow().bold().to_string(),
        "config" => prefix.bright_green().bold().to_string(),
        _ => prefix.bright_blue().bold().to_string(),
    }
}
