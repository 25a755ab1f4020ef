use anyhow::{Context, Result};
use tracing::info;

use quill_engine::{MoveSelector, SelectorConfig};
use quill_uci::UciEngine;

fn main() -> Result<()> {
    // stdout belongs to the UCI protocol.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("quill starting");

    let selector =
        MoveSelector::new(SelectorConfig::default()).context("failed to build opening book")?;
    info!(entries = selector.book().len(), "opening book ready");

    UciEngine::new(selector).run()?;
    Ok(())
}
