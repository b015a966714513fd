//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management

pub mod app;

pub use app::{App, RunOutcome};
