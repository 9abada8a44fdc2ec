//! Memory Access Types.
//!
//! This module defines the classification of memory accesses replayed from a trace.
//! These types are used for the following:
//! 1. **Write Policy:** Deciding whether an access marks a line dirty or writes through.
//! 2. **Trace Parsing:** Mapping the operation token of a trace line to an access kind.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access.
    Read,

    /// Data write access.
    ///
    /// Under write-back this marks the resident line dirty; under write-through
    /// it produces an immediate block transfer to memory.
    Write,
}

impl AccessType {
    /// Classifies a trace operation token.
    ///
    /// Only the exact token `write` is a write; every other token is treated as a read.
    pub fn from_token(token: &str) -> Self {
        if token == "write" { Self::Write } else { Self::Read }
    }

    /// Returns `true` for [`AccessType::Write`].
    #[inline(always)]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
