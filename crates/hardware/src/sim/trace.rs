//! Memory-access trace reader.
//!
//! A trace is a text file with one access per line: an operation token followed by
//! a hexadecimal address, separated by whitespace (`read 0x1f40`, `write 7ffc`).
//! It performs:
//! 1. **Parsing:** `write` is a write; any other operation token is a read. The address
//!    is the longest run of hex digits after an optional sign and `0x` prefix; anything
//!    after that run, and any further tokens, are ignored.
//! 2. **Skipping:** Lines without both tokens, with no hex digits, or with an address
//!    wider than 64 bits are skipped and counted. Bytes that are not UTF-8 never make a
//!    line an error. Skipped lines never reach the cache.
//! 3. **Streaming:** Events are produced lazily in file order.

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

use tracing::debug;

use crate::common::data::AccessType;
use crate::common::error::TraceError;

/// One replayed memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// Read or write.
    pub kind: AccessType,
    /// Byte address.
    pub addr: u64,
}

impl TraceEvent {
    /// Parses a single trace line, returning `None` if it is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachesim_core::common::AccessType;
    /// use cachesim_core::sim::TraceEvent;
    ///
    /// let ev = TraceEvent::parse("write 0x1F40").unwrap();
    /// assert_eq!(ev.kind, AccessType::Write);
    /// assert_eq!(ev.addr, 0x1f40);
    /// assert_eq!(TraceEvent::parse("read 1f40,").map(|e| e.addr), Some(0x1f40));
    /// assert!(TraceEvent::parse("read zz").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let op = tokens.next()?;
        let addr = parse_hex(tokens.next()?)?;
        Some(Self {
            kind: AccessType::from_token(op),
            addr,
        })
    }
}

/// Parses the leading hex run of `token`, the way a formatted stream read does.
///
/// A `-` sign negates modulo 2^64. Overflow rejects the token.
fn parse_hex(token: &str) -> Option<u64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'+') => (false, &token[1..]),
        Some(b'-') => (true, &token[1..]),
        _ => (false, token),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    let len = rest.bytes().take_while(u8::is_ascii_hexdigit).count();
    if len == 0 {
        return None;
    }
    let value = u64::from_str_radix(&rest[..len], 16).ok()?;
    Some(if negative { value.wrapping_neg() } else { value })
}

/// Lazy iterator over the events of a trace.
///
/// Yields `Err` only for I/O failures; malformed lines, including ones that are
/// not valid UTF-8, are skipped.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: Split<R>,
    line_no: u64,
    skipped: u64,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far.
    pub const fn skipped_lines(&self) -> u64 {
        self.skipped
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceEvent, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            let line = String::from_utf8_lossy(&bytes);
            if let Some(event) = TraceEvent::parse(&line) {
                return Some(Ok(event));
            }
            self.skipped += 1;
            debug!(line = self.line_no, content = %line.trim_end(), "skipping malformed trace line");
        }
    }
}

/// Reads an entire trace file into memory.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be opened or read.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceEvent>, TraceError> {
    let path = path.as_ref();
    let mut reader = TraceReader::open(path)?;
    let events = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
    debug!(
        path = %path.display(),
        events = events.len(),
        skipped = reader.skipped_lines(),
        "trace loaded"
    );
    Ok(events)
}
