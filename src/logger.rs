//! Logging utilities with colored output and per-job status lines.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `status` for the outcome line of each manifest entry
//!
//! # Example
//!
//! ```ignore
//! log!("convert"; "rasterizing {} images", count);
//!
//! status(Status::Success, "created favicon-32x32.png (32x32)", "");
//! status(Status::Skipped, "og-image.jpg already exists", "");
//! status(Status::Failed, "favicon-16x16.png: source not found", "img/favicon-16x16.svg");
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

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

/// Log a debug message (only shown when --verbose is enabled)
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

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Render `text` in `style` if `stream` takes colors.
///
/// Goes through `if_supports_color`, so `--color always|never` applies.
pub fn paint(stream: Stream, text: impl fmt::Display, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "convert" | "generate" => Style::new().bright_blue(),
        "done" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    paint(Stream::Stdout, format!("[{module}]"), style.bold())
}

// ============================================================================
// Job Status
// ============================================================================

/// Outcome marker of a job status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// ✓, green
    Success,
    /// –, dimmed message
    Skipped,
    /// ✗, red
    Failed,
}

/// Print the status block of one manifest entry.
///
/// Each entry prints as soon as it finishes, so partial progress stays
/// visible even if a later job fails. A non-empty `detail` goes on an
/// indented second line.
pub fn status(status: Status, message: &str, detail: &str) {
    let line = status_line(status, message, detail);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{line}").ok();
    stdout.flush().ok();
}

fn status_line(status: Status, message: &str, detail: &str) -> String {
    let (symbol, message) = match status {
        Status::Success => (
            paint(Stream::Stdout, "✓", Style::new().green()),
            message.to_string(),
        ),
        Status::Skipped => (
            paint(Stream::Stdout, "–", Style::new().dimmed()),
            paint(Stream::Stdout, message, Style::new().dimmed()),
        ),
        Status::Failed => (
            paint(Stream::Stdout, "✗", Style::new().red()),
            message.to_string(),
        ),
    };

    if detail.is_empty() {
        format!("{symbol} {message}")
    } else {
        format!("{symbol} {message}\n  {detail}")
    }
}

// ============================================================================
// Tests
// ============================================================================
