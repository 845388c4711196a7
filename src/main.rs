//! Binary entry point that glues the read-only recipe store to the TUI. The
//! bootstrapping pipeline is short on purpose: open the store (creating the
//! schema on first run), mount the home page, and drive the Ratatui event
//! loop until the user exits. Rows are written to the store out-of-band, so
//! nothing here ever mutates data.
use carnet_cuisine::{ensure_schema, run_app, App, Database};

/// Initialize persistence and launch the event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unwritable data directory) to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let conn = ensure_schema()?;
    let mut app = App::new(Database::new(conn));
    run_app(&mut app)
}
