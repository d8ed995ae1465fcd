//! Domain layer for Spares Hub.
//!
//! This module contains the core domain types, independent of storage, rendering
//! or the terminal front end.
//!
//! # Organization
//!
//! - [`catalog`]: Static era, category and make/model taxonomy
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing record and part condition

pub mod catalog;
pub mod error;
pub mod listing;

pub use catalog::{Category, Era, OTHER_UNKNOWN};
pub use error::{Result, SparesError};
pub use listing::{fold_case, fold_char, Condition, Listing, MAX_PHOTOS};
