mod engines;
mod messages;
mod state;
mod update;

pub use state::App;

use anyhow::{Context, Result};
use messages::HostEvent;
use std::io::{BufRead, Write};
use tracing::{debug, info};
use update::Effect;

/// Feeds one JSON host event per line into the reducer and writes every
/// resulting effect as a JSON line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn run_script<R: BufRead, W: Write>(app: &mut App, reader: R, mut writer: W) -> Result<()> {
    let mut events = 0usize;
    let mut emitted = 0usize;

    for effect in app.start() {
        write_effect(&mut writer, &effect).context("writing startup effects")?;
        emitted += 1;
    }

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading script line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: HostEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("parsing host event on line {line_no}"))?;
        debug!(line = line_no, event = event.name(), "Script event");
        events += 1;

        for effect in app.reduce(event) {
            write_effect(&mut writer, &effect)
                .with_context(|| format!("writing effect for line {line_no}"))?;
            emitted += 1;
        }
    }

    writer.flush()?;
    info!(events, effects = emitted, screen = ?app.screen(), "Script finished");
    Ok(())
}

fn write_effect<W: Write>(writer: &mut W, effect: &Effect) -> Result<()> {
    serde_json::to_writer(&mut *writer, effect)?;
    writer.write_all(b"\n")?;
    Ok(())
}
