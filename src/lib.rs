//! # Roster
//!
//! An interactive command-line tracker for departments, roles and employees
//! stored in SQLite.
//!
//! ## Features
//!
//! - **Browse**: tabular views of departments, roles and employees, including
//!   each employee's department, salary and manager
//! - **Record**: add departments, roles and employees through guided prompts
//! - **Reassign**: move an employee to a different role
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use roster::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::parse().run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
