//! Application layer coordinating state, events, and actions.
//!
//! Sits between the front end (main.rs) and the domain, query and storage
//! layers.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Store
//!                                             ↓
//!                                  compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Store writes emitted by the event handler
//! - [`funnel`]: Pure reducer for the era → make → model → category funnel
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Step, field, sort and route types
//! - [`session`]: Runtime that executes actions against a listing store
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod funnel;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use funnel::{reduce, Choice, FunnelAction, Selection};
pub use handler::{handle_event, Event};
pub use modes::{FunnelField, Route, SortMode, Step};
pub use session::Session;
pub use state::AppState;
