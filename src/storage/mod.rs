//! Storage layer for the listing collection.
//!
//! The core treats storage as an external collaborator holding one ordered
//! collection of listings. Reads are infallible and fall back to the seed set;
//! writes report errors to the caller.
//!
//! # Modules
//!
//! - `backend`: [`ListingStore`] trait and blob decoding
//! - `json`: JSON file implementation
//! - `memory`: In-process implementation
//! - `seed`: Fixed demo listings

pub mod backend;
pub mod json;
pub mod memory;
pub mod seed;

pub use backend::{decode_listings, ListingStore};
pub use json::JsonListingStore;
pub use memory::MemoryListingStore;
pub use seed::seed_listings;
