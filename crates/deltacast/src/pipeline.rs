//! Single-pass streaming transcode pipeline.
//!
//! The pipeline holds only the current record and the scalar accumulator,
//! writing each transformed record as soon as it is produced. Input size is
//! bounded by the underlying stream source, not by process memory.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{CastError, Result};
use crate::event::Event;
use crate::header::Header;
use crate::transform::Direction;

/// Transcode one recording stream between temporal encodings.
///
/// Decodes the header line, re-encodes it unchanged, then streams every
/// event through the timing transform in arrival order. Output record N
/// corresponds exactly to input record N.
///
/// The first decode or I/O failure aborts the call with that error; output
/// already written stays written, and the caller decides whether to discard
/// it.
pub fn transcode<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    direction: Direction,
) -> Result<()> {
    let mut lines = input.lines();

    let header_line = next_record(&mut lines)?
        .ok_or_else(|| CastError::malformed("empty stream: no header record"))?;
    let header = Header::decode(&header_line)?;
    debug!(
        version = header.version,
        width = header.width,
        height = header.height,
        "decoded header"
    );

    writeln!(output, "{}", header.encode())?;

    let mut accumulator = 0.0_f64;
    let mut events = 0_u64;
    while let Some(line) = next_record(&mut lines)? {
        let mut event = Event::decode(&line)?;
        let (next, time) = direction.apply(accumulator, event.time);
        accumulator = next;
        event.time = time;
        writeln!(output, "{}", event.encode())?;
        events += 1;
    }

    debug!(events, ?direction, "transcode complete");
    Ok(())
}

/// Next non-blank line, or `None` once the input is exhausted.
fn next_record(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<Option<String>> {
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
