//! Interactive layer: per-page view controllers, the app shell that routes
//! between them, and the terminal plumbing around the draw loop.

mod app;
mod helpers;
pub mod pages;
mod terminal;

pub use app::{App, Page};
pub use terminal::run_app;
