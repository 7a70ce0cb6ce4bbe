use bytes::Bytes;

use super::Record;
use crate::error::EncodeError;
use crate::types::MAX_VALUE_LEN;

// ════════════════════════════════════════════════════════════════════════
// Typed putters: fixed-width values under the protocol byte order
// ════════════════════════════════════════════════════════════════════════

impl Record {
    /// Store a single byte under `tag`.
    #[inline]
    pub fn put_u8(&mut self, tag: i32, value: u8) {
        self.insert_owned(tag, Bytes::copy_from_slice(&[value]));
    }

    /// Store a 2-byte little-endian i16 under `tag`.
    #[inline]
    pub fn put_i16(&mut self, tag: i32, value: i16) {
        self.insert_owned(tag, Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    /// Store a 4-byte little-endian i32 under `tag`.
    #[inline]
    pub fn put_i32(&mut self, tag: i32, value: i32) {
        self.insert_owned(tag, Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    /// Store an 8-byte little-endian i64 under `tag`.
    #[inline]
    pub fn put_i64(&mut self, tag: i32, value: i64) {
        self.insert_owned(tag, Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    /// Store a 4-byte little-endian f32 under `tag`.
    #[inline]
    pub fn put_f32(&mut self, tag: i32, value: f32) {
        self.insert_owned(tag, Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    /// Store an 8-byte little-endian f64 under `tag`.
    #[inline]
    pub fn put_f64(&mut self, tag: i32, value: f64) {
        self.insert_owned(tag, Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Variable-width putters
    // ════════════════════════════════════════════════════════════════════════

    /// Store the raw UTF-8 bytes of `value` under `tag`.
    ///
    /// No terminator is added and nothing is trimmed; the stored length is
    /// exactly `value.len()`.
    pub fn put_str(&mut self, tag: i32, value: &str) -> Result<(), EncodeError> {
        self.put_bytes(tag, value.as_bytes())
    }

    /// Store another record's serialized form under `tag`.
    ///
    /// The nested payload stays opaque until [`get_record`](Record::get_record)
    /// parses it back on demand.
    pub fn put_record(&mut self, tag: i32, value: &Record) -> Result<(), EncodeError> {
        let payload = value.serialize()?;
        if payload.len() > MAX_VALUE_LEN {
            return Err(EncodeError::ValueTooLarge {
                tag,
                len: payload.len(),
            });
        }
        // serialize() already returned owned bytes; no second copy needed.
        self.insert_owned(tag, payload);
        Ok(())
    }
}
