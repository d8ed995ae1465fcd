//! Sell flow: draft form values, the posting gate and photo encoding.

pub mod draft;
pub mod photos;

pub use draft::{DraftEdit, SellDraft};
pub use photos::{DataUrlEncoder, PhotoEncoder};
