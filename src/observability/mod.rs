//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → spareshub.log
//! ```
//!
//! The terminal front end owns stdout, so log output goes to
//! `<data dir>/spareshub.log`, rotated at 10 MB with 3 backups.
//!
//! # Usage
//!
//! ```no_run
//! use spareshub::observability::init_tracing;
//! use spareshub::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("front end started");
//! ```

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
