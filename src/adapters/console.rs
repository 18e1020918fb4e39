use crate::utils::error::Result;
use std::io::{ErrorKind, Write};

/// Writes the rendered list followed by one newline; nothing for an empty list.
/// A closed reader (`| head -1`) ends output quietly.
pub fn print_result<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }

    match writeln!(out, "{}", rendered).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
