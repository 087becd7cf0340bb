//! Structural 128-bit checksums
//!
//! Content-stable identifiers for descriptors, generated variable names, and
//! document revisions. The hash is FNV-1a over 128 bits, chosen because the
//! contract requires identical results across processes and compiler versions
//! (`std::hash` hashers explicitly do not promise that).
//!
//! Every appended value is prefixed with a type-kind discriminator byte, so
//! an `i32` zero and an `i64` zero produce different checksums even though
//! their payload bits agree.

use std::fmt;

const FNV_OFFSET_BASIS: u128 = 0x6c62272e07bb014262b821756295c58d;
const FNV_PRIME: u128 = 0x0000000001000000000000000000013b;

/// A 128-bit structural hash over a typed value sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum(u128);

impl Checksum {
    pub fn as_u128(self) -> u128 {
        self.0
    }

    /// Compute a checksum over a single string value
    pub fn of_string(value: &str) -> Self {
        let mut builder = ChecksumBuilder::new();
        builder.append_string(value);
        builder.finish()
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Type-kind discriminators hashed ahead of each appended value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ValueKind {
    Null = 0,
    Bool = 1,
    I32 = 2,
    I64 = 3,
    String = 4,
    Char = 5,
    Byte = 6,
    Checksum = 7,
}

/// Incremental builder for a [`Checksum`]
#[derive(Debug, Clone)]
pub struct ChecksumBuilder {
    state: u128,
}

impl ChecksumBuilder {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    fn append_byte_raw(&mut self, byte: u8) {
        self.state ^= byte as u128;
        self.state = self.state.wrapping_mul(FNV_PRIME);
    }

    fn append_bytes_raw(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.append_byte_raw(byte);
        }
    }

    fn append_kind(&mut self, kind: ValueKind) {
        self.append_byte_raw(kind as u8);
    }

    pub fn append_null(&mut self) {
        self.append_kind(ValueKind::Null);
    }

    pub fn append_bool(&mut self, value: bool) {
        self.append_kind(ValueKind::Bool);
        self.append_byte_raw(value as u8);
    }

    pub fn append_i32(&mut self, value: i32) {
        self.append_kind(ValueKind::I32);
        self.append_bytes_raw(&value.to_le_bytes());
    }

    pub fn append_i64(&mut self, value: i64) {
        self.append_kind(ValueKind::I64);
        self.append_bytes_raw(&value.to_le_bytes());
    }

    pub fn append_string(&mut self, value: &str) {
        self.append_kind(ValueKind::String);
        self.append_bytes_raw(&(value.len() as u64).to_le_bytes());
        self.append_bytes_raw(value.as_bytes());
    }

    /// Appends an optional string, hashing the null discriminator when absent
    pub fn append_opt_string(&mut self, value: Option<&str>) {
        match value {
            Some(value) => self.append_string(value),
            None => self.append_null(),
        }
    }

    pub fn append_char(&mut self, value: char) {
        self.append_kind(ValueKind::Char);
        self.append_bytes_raw(&(value as u32).to_le_bytes());
    }

    pub fn append_byte(&mut self, value: u8) {
        self.append_kind(ValueKind::Byte);
        self.append_byte_raw(value);
    }

    /// Appends a previously computed checksum, enabling nested structural
    /// hashing without re-walking the nested value
    pub fn append_checksum(&mut self, value: Checksum) {
        self.append_kind(ValueKind::Checksum);
        self.append_bytes_raw(&value.0.to_le_bytes());
    }

    pub fn finish(self) -> Checksum {
        Checksum(self.state)
    }
}

impl Default for ChecksumBuilder {
    fn default() -> Self {
        Self::new()
    }
}
