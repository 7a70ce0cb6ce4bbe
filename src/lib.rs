//! Binary codec for tagged, self-describing records.
//!
//! A [`Record`] is a flat sequence of TLV (type-tag, length, value)
//! entries: each entry is a 4-byte little-endian `i32` tag, a 4-byte
//! little-endian `i32` length, and that many payload bytes. Records are
//! built incrementally through typed putters, serialized to a flat
//! buffer, and parsed back. A payload may itself be a serialized
//! record, decoded lazily via [`Record::get_record`].
//!
//! The format is schema-free: tags are bare integers whose meaning is a
//! contract between the peers exchanging the buffer. There is no magic
//! number, version field or overall-length prefix; the caller supplies
//! the exact window to parse (transport framing is the transport's job).
//!
//! # Examples
//!
//! ## Building and serializing a record
//!
//! ```
//! use tagwire::Record;
//!
//! let mut record = Record::new();
//! record.put_i32(1, 42);
//! record.put_str(2, "alice")?;
//! record.put_f64(3, 99.5);
//!
//! let bytes = record.serialize()?;
//! // 3 entries, 8-byte header each, 4 + 5 + 8 payload bytes
//! assert_eq!(bytes.len() as u64, record.wire_len());
//! # Ok::<(), tagwire::EncodeError>(())
//! ```
//!
//! ## Parsing a buffer back
//!
//! ```
//! use tagwire::Record;
//!
//! let mut record = Record::new();
//! record.put_i64(7, -1);
//! record.put_str(9, "bob")?;
//! let bytes = record.serialize()?;
//!
//! let parsed = Record::parse(&bytes, 0, bytes.len())?;
//! assert_eq!(parsed.get_i64(7)?, Some(-1));
//! assert_eq!(parsed.get_str(9)?, Some("bob".to_owned()));
//! // Absent tags are a normal outcome, not an error.
//! assert_eq!(parsed.get_i64(999)?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Nesting records
//!
//! ```
//! use tagwire::Record;
//!
//! let mut inner = Record::new();
//! inner.put_i32(1, 42);
//!
//! let mut outer = Record::new();
//! outer.put_record(2, &inner)?;
//!
//! let parsed = Record::parse_all(&outer.serialize()?)?;
//! let inner = parsed.get_record(2)?.unwrap();
//! assert_eq!(inner.get_i32(1)?, Some(42));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! - [`DecodeError`]: a parse window overruns its buffer, an entry
//!   header or payload is truncated, or a declared length is negative.
//!   A failed parse never yields a partially populated record.
//! - [`TypeMismatch`]: a typed getter found a payload whose byte length
//!   disagrees with the requested fixed width, or non-UTF-8 bytes behind
//!   [`Record::get_str`]. Absence is `Ok(None)`, never an error.
//! - [`EncodeError`]: a payload exceeds the signed 32-bit length field,
//!   or the total serialized size exceeds the addressable buffer size.

mod deserialization;
mod error;
mod record;
mod serialization;
pub mod types;

pub use error::{DecodeError, EncodeError, TypeMismatch};
pub use record::{Iter, Record};
