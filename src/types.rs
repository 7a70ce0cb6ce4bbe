// ─── Wire Layout ────────────────────────────────────────────────────────────
//
//  ┌──────────────────────────────────────────────┐
//  │ Entry (repeated, no separators, no padding)  │
//  │   tag:    i32 (LE)                           │
//  │   length: i32 (LE)   ← byte count of value   │
//  │   value:  [u8; length]   opaque payload      │
//  └──────────────────────────────────────────────┘
//
// A record is zero or more entries back to back. There is no magic number,
// no overall-length prefix and no version field; the byte count to parse
// is supplied out of band by the caller.
//
// All multi-byte integers on the wire are little-endian. Every encoder and
// decoder in this crate goes through the `*_le_bytes` / `put_*_le`
// conversions; there is no byte-order negotiation or alternate profile.

/// Width of the entry tag field.
pub const TAG_BYTES: usize = 4;

/// Width of the entry length field.
pub const LEN_BYTES: usize = 4;

/// Fixed per-entry header cost: tag + length.
pub const ENTRY_HEADER_BYTES: usize = TAG_BYTES + LEN_BYTES;

/// Largest payload the signed 32-bit length field can declare.
pub const MAX_VALUE_LEN: usize = i32::MAX as usize;
