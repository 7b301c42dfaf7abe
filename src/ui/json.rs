use std::io::{self, Write};

use serde::Serialize;

/// Write a single JSON document followed by a newline.
///
/// Serializes straight to the writer, so map ordering chosen by the value's
/// `Serialize` impl is kept.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
