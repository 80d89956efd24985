//! Tumikia session engine
//!
//! Binds a store, a registration draft and the wizard step into one
//! `Session` that processes discrete user intents and hands recomputed view
//! fragments back to whatever presentation layer hosts it. Single-threaded
//! and run-to-completion: each intent is fully handled before the next one
//! is processed, so the store is never mutated concurrently.

pub mod events;
pub mod session;
pub mod views;

pub use events::{SurfaceRefresh, UiEvent};
pub use session::Session;
pub use views::AgeSummary;
