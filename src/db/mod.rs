//! Database layer for the roster application.
//!
//! A single SQLite connection wrapped in [`db::Db`] is opened once at startup
//! and borrowed by every repository. There is no global handle; callers thread
//! `&Db` through explicitly.
//!
//! ```rust
//! use roster::db::{db::Db, departments::Departments};
//!
//! let db = Db::in_memory()?;
//! let id = Departments::new(&db).insert("Engineering")?;
//! assert_eq!(Departments::new(&db).list()?[0].id, id);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and schema bootstrap.
pub mod db;

/// Department rows.
pub mod departments;

/// Employee rows, including the manager self-join.
pub mod employees;

/// Role rows joined to their owning department.
pub mod roles;
