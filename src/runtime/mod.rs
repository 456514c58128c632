//! Runtime - the event loop around `update`
//!
//! [`App`] owns the model, feeds messages through `update`, and executes the
//! commands that come back (background transform calls, notifications).

mod app;

pub use app::App;
