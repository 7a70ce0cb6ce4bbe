use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncodeError;
use crate::record::Record;

// ─── Writer ─────────────────────────────────────────────────────────────────

impl Record {
    /// Serialize the record into a flat buffer.
    ///
    /// Entries are written in ascending tag order (4-byte LE tag, 4-byte
    /// LE length, payload) with no separators, padding or checksum. The
    /// buffer is sized up front from the record's tracked wire length.
    pub fn serialize(&self) -> Result<Bytes, EncodeError> {
        let mut buf = BytesMut::with_capacity(self.checked_capacity()?);
        self.write_entries(&mut buf);
        Ok(buf.freeze())
    }

    /// Serialize into a reusable buffer.
    ///
    /// Identical output to [`serialize`](Record::serialize), but reuses the
    /// caller's `BytesMut` to avoid reallocating when serializing many
    /// records in sequence. The buffer is cleared but retains its capacity.
    pub fn serialize_into(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
        let cap = self.checked_capacity()?;
        buf.clear();
        buf.reserve(cap);
        self.write_entries(buf);
        Ok(())
    }

    fn checked_capacity(&self) -> Result<usize, EncodeError> {
        usize::try_from(self.wire_len()).map_err(|_| EncodeError::SizeOverflow(self.wire_len()))
    }

    fn write_entries(&self, buf: &mut BytesMut) {
        for (tag, value) in self.iter() {
            buf.put_i32_le(tag);
            // put_bytes caps every payload at i32::MAX, so this cast is exact.
            buf.put_i32_le(value.len() as i32);
            buf.put_slice(value);
        }
    }
}
