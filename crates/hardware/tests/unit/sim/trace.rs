//! Trace Reader Tests.
//!
//! Verifies file-order parsing, the read/write classification, and that
//! malformed lines are skipped without reaching the cache.

use cachesim_core::common::{AccessType, TraceError};
use cachesim_core::sim::{TraceEvent, TraceReader, load_trace};

use crate::common::{SMALL_TRACE, trace_file};

#[test]
fn load_trace_preserves_order_and_skips_garbage() {
    let file = trace_file(SMALL_TRACE);
    let events = load_trace(file.path()).unwrap();
    let expected = [
        (AccessType::Read, 0x0),
        (AccessType::Write, 0x4),
        (AccessType::Read, 0x0),
        (AccessType::Write, 0x100),
        (AccessType::Write, 0x4),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (kind, addr)) in events.iter().zip(expected) {
        assert_eq!(*event, TraceEvent { kind, addr });
    }
}

#[test]
fn reader_is_lazy_and_counts_skips() {
    let input = "write 0x10\n   \n# no address\nread 0x20 extra tokens\nread\n";
    let mut reader = TraceReader::new(input.as_bytes());

    let first = reader.next().unwrap().unwrap();
    assert_eq!(first.kind, AccessType::Write);
    assert_eq!(reader.skipped_lines(), 0);

    let second = reader.next().unwrap().unwrap();
    assert_eq!(second.addr, 0x20);
    assert_eq!(reader.skipped_lines(), 2);

    assert!(reader.next().is_none());
    assert_eq!(reader.skipped_lines(), 3);
}

#[test]
fn crlf_lines_parse() {
    let events: Vec<_> = TraceReader::new("read 0xff\r\nwrite 0x100\r\n".as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].addr, 0x100);
}

#[test]
fn full_width_addresses_parse() {
    let ev = TraceEvent::parse("read ffffffffffffffff").unwrap();
    assert_eq!(ev.addr, u64::MAX);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_trace(dir.path().join("absent.trace")).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}

#[test]
fn empty_trace_yields_nothing() {
    let file = trace_file("");
    assert!(load_trace(file.path()).unwrap().is_empty());
}

#[test]
fn invalid_utf8_line_is_skipped_not_fatal() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"read 0x40\n\xff\xfe\x00 binary junk\nwrite 0x80\n")
        .unwrap();
    let events = load_trace(file.path()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].addr, 0x80);
}

#[test]
fn address_stops_at_first_non_hex_character() {
    let events: Vec<_> = TraceReader::new("read 1f40,\nwrite +0x20;\nread 0xg\n".as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();
    let addrs: Vec<u64> = events.iter().map(|e| e.addr).collect();
    assert_eq!(addrs, [0x1f40, 0x20]);
}
