//! Support modules for the roster application.
//!
//! - **Configuration**: database location resolution and the data directory
//! - **Messaging**: the `Message` catalogue and the `msg_*` output macros
//! - **Interaction**: terminal prompts and table rendering

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod prompt;
pub mod view;
