// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Failures while parsing a byte buffer into a [`Record`](crate::Record).
///
/// A failed parse never hands back a partially populated record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("parse range {offset}+{length} exceeds buffer of {buffer_len} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },
    #[error("truncated entry header: need 8 bytes, {remaining} remaining")]
    TruncatedHeader { remaining: usize },
    #[error("truncated value for tag {tag}: declared {declared} bytes, {remaining} remaining")]
    TruncatedValue {
        tag: i32,
        declared: usize,
        remaining: usize,
    },
    #[error("negative declared length {length} for tag {tag}")]
    NegativeLength { tag: i32, length: i32 },
}

/// Failures while encoding a value or serializing a whole record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("value for tag {tag} is {len} bytes, exceeding the i32 length field")]
    ValueTooLarge { tag: i32, len: usize },
    #[error("serialized size {0} exceeds the addressable buffer size")]
    SizeOverflow(u64),
}

/// A stored payload disagrees with the shape a typed getter expects.
///
/// Absence of a tag is not a mismatch; getters report it as `Ok(None)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeMismatch {
    #[error("tag {tag}: expected a {expected}-byte value, found {actual} bytes")]
    Width {
        tag: i32,
        expected: usize,
        actual: usize,
    },
    #[error("tag {tag}: stored bytes are not valid UTF-8")]
    NotUtf8 { tag: i32 },
}
