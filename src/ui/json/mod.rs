//! JSON output utilities for CLI commands.
//!
//! Every line written to stdout in `--json` mode is one JSON object (NDJSON).

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let value =
        serde_json::to_value(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    emit(value)
}

/// Emit a pre-serialized line (events that already carry their `command`).
pub fn emit_line(line: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_appends_newline() {
        let mut buf = Vec::new();
        write_event(&mut buf, &serde_json::json!({"event": "start"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"event\":\"start\"}\n");
    }
}
