//! Convenient macros for application messaging and logging.
//!
//! Every user-facing line goes through one of these macros. They route output
//! to `tracing` when debug mode is on, and to plain `println!`/`eprintln!`
//! otherwise, so the interactive menu stays free of log decorations in normal
//! use.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when any of these holds:
//! - **`ROSTER_DEBUG`** is set
//! - **`RUST_LOG`** is set
//! - **`--debug`** was passed, which calls [`enable_debug_mode`] before the
//!   first message is printed
//!
//! The result is cached in a `OnceLock` on first use.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix, written to stderr
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//! - **`msg_error_anyhow!`**: Create an `anyhow::Error` from a message
//!
//! ## Usage
//!
//! ```rust
//! use roster::{msg_info, msg_success};
//! use roster::libs::messages::Message;
//!
//! msg_success!(Message::DepartmentAdded("Engineering".to_string()));
//! msg_info!(Message::NoDepartments);
//! ```

use std::sync::OnceLock;

/// Cached debug mode flag.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("ROSTER_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Forces debug mode on.
///
/// Must be called before the first message is printed; once the flag has been
/// read the cached value wins.
pub fn enable_debug_mode() {
    let _ = DEBUG_MODE.set(true);
}

/// Prints a general message with automatic debug mode routing.
///
/// ```rust,ignore
/// msg_print!(Message::Farewell);
/// // Output: "Goodbye!"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```rust,ignore
/// msg_success!(Message::DepartmentAdded("Sales".to_string()));
/// // Output: "✅ Added Sales to the database."
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode the message goes to stderr so it does not interleave with
/// table output redirected to a file.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
///
/// ```rust,ignore
/// msg_info!(Message::NoDepartments);
/// // Output: "ℹ️ No departments available. Please add a department first."
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Suppressed entirely outside debug mode.
///
/// ```rust,ignore
/// msg_debug!(format!("Executing: {}", sql));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
///
/// ```rust,ignore
/// let err = msg_error_anyhow!(Message::NoSelection);
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
