use bytes::Bytes;

use crate::error::DecodeError;
use crate::record::Record;
use crate::types::{ENTRY_HEADER_BYTES, TAG_BYTES};

// ─── Parser ─────────────────────────────────────────────────────────────────

impl Record {
    /// Parse `length` bytes of `buffer` starting at `offset` into a record.
    ///
    /// A cursor walks the window one entry at a time: 4-byte LE tag,
    /// 4-byte LE declared length, payload. Every bound is checked before
    /// it is trusted; the parser never reads past `offset + length` nor
    /// past the physical end of `buffer`. Duplicate tags resolve
    /// last-write-wins, exactly as [`put_bytes`](Record::put_bytes) does.
    ///
    /// On failure the partially built record is discarded; the caller gets
    /// an error, never a half-populated record.
    pub fn parse(buffer: &[u8], offset: usize, length: usize) -> Result<Record, DecodeError> {
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= buffer.len())
            .ok_or(DecodeError::OutOfBounds {
                offset,
                length,
                buffer_len: buffer.len(),
            })?;

        let mut record = Record::new();
        let mut cursor = offset;

        while cursor < end {
            let remaining = end - cursor;
            if remaining < ENTRY_HEADER_BYTES {
                return Err(DecodeError::TruncatedHeader { remaining });
            }

            let tag = read_i32_le(buffer, cursor);
            let declared = read_i32_le(buffer, cursor + TAG_BYTES);
            if declared < 0 {
                return Err(DecodeError::NegativeLength {
                    tag,
                    length: declared,
                });
            }

            let declared = declared as usize;
            let available = remaining - ENTRY_HEADER_BYTES;
            if declared > available {
                return Err(DecodeError::TruncatedValue {
                    tag,
                    declared,
                    remaining: available,
                });
            }

            let start = cursor + ENTRY_HEADER_BYTES;
            record.insert_owned(tag, Bytes::copy_from_slice(&buffer[start..start + declared]));
            cursor = start + declared;
        }

        Ok(record)
    }

    /// Parse an entire buffer: `parse(buffer, 0, buffer.len())`.
    pub fn parse_all(buffer: &[u8]) -> Result<Record, DecodeError> {
        Record::parse(buffer, 0, buffer.len())
    }
}

/// Read a little-endian i32 at `at`. Caller has bounds-checked `at + 4`.
#[inline]
fn read_i32_le(buffer: &[u8], at: usize) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buffer[at..at + 4]);
    i32::from_le_bytes(raw)
}
