use super::Record;
use crate::error::{DecodeError, TypeMismatch};

// ════════════════════════════════════════════════════════════════════════
// Typed getters
//
// Absence is Ok(None), a normal outcome distinct from malformed data.
// A present payload whose length differs from the accessor's fixed width
// is a TypeMismatch, never an out-of-bounds or partial read.
// ════════════════════════════════════════════════════════════════════════

impl Record {
    /// Fetch the payload under `tag` as an exactly-`N`-byte array.
    #[inline]
    fn fixed<const N: usize>(&self, tag: i32) -> Result<Option<[u8; N]>, TypeMismatch> {
        match self.raw(tag) {
            None => Ok(None),
            Some(bytes) => {
                let raw: [u8; N] =
                    bytes
                        .as_ref()
                        .try_into()
                        .map_err(|_| TypeMismatch::Width {
                            tag,
                            expected: N,
                            actual: bytes.len(),
                        })?;
                Ok(Some(raw))
            }
        }
    }

    /// Get a single-byte value.
    #[inline]
    pub fn get_u8(&self, tag: i32) -> Result<Option<u8>, TypeMismatch> {
        Ok(self.fixed::<1>(tag)?.map(|[b]| b))
    }

    /// Get a 2-byte little-endian i16.
    #[inline]
    pub fn get_i16(&self, tag: i32) -> Result<Option<i16>, TypeMismatch> {
        Ok(self.fixed::<2>(tag)?.map(i16::from_le_bytes))
    }

    /// Get a 4-byte little-endian i32.
    #[inline]
    pub fn get_i32(&self, tag: i32) -> Result<Option<i32>, TypeMismatch> {
        Ok(self.fixed::<4>(tag)?.map(i32::from_le_bytes))
    }

    /// Get an 8-byte little-endian i64.
    #[inline]
    pub fn get_i64(&self, tag: i32) -> Result<Option<i64>, TypeMismatch> {
        Ok(self.fixed::<8>(tag)?.map(i64::from_le_bytes))
    }

    /// Get a 4-byte little-endian f32.
    #[inline]
    pub fn get_f32(&self, tag: i32) -> Result<Option<f32>, TypeMismatch> {
        Ok(self.fixed::<4>(tag)?.map(f32::from_le_bytes))
    }

    /// Get an 8-byte little-endian f64.
    #[inline]
    pub fn get_f64(&self, tag: i32) -> Result<Option<f64>, TypeMismatch> {
        Ok(self.fixed::<8>(tag)?.map(f64::from_le_bytes))
    }

    /// Get the payload under `tag` decoded as UTF-8, verbatim.
    ///
    /// The stored bytes come back exactly as they were put: trailing
    /// whitespace is data, not padding, since the wire format carries an
    /// explicit length.
    pub fn get_str(&self, tag: i32) -> Result<Option<String>, TypeMismatch> {
        match self.raw(tag) {
            None => Ok(None),
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => Ok(Some(s.to_owned())),
                Err(_) => Err(TypeMismatch::NotUtf8 { tag }),
            },
        }
    }

    /// Parse the payload under `tag` as a nested record.
    ///
    /// Nested payloads are decoded lazily: this call parses exactly one
    /// level, with the same error semantics as [`Record::parse`].
    pub fn get_record(&self, tag: i32) -> Result<Option<Record>, DecodeError> {
        match self.raw(tag) {
            None => Ok(None),
            Some(bytes) => Record::parse(bytes, 0, bytes.len()).map(Some),
        }
    }
}
