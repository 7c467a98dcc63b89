//! Byte Codec Library
//!
//! Converts between raw byte buffers and typed scalar/array values under a
//! selectable word order, plus bit extraction and text renderings.
//!
//! # Architecture
//!
//! This library provides:
//! - **Endian Reorderer**: `Endianness` (ABCD/BADC/CDAB/DCBA) and `reorder`
//! - **Scalar/Array Codec**: 16-bit values with a reverse flag, 32/64-bit
//!   integers and floats with a four-way word order, homogeneous arrays
//! - **Bit/Text Codec**: bool extraction, hex/base64/binary/ASCII renderings,
//!   XOR checksum and named text encodings
//! - **Typed Values**: run-time `DataType` dispatch over the codec
//!
//! # Example
//!
//! ```rust
//! use byte_codec::bytes::{from_i32, to_i32, Endianness};
//!
//! let bytes = from_i32(0x12345678, Endianness::CDAB);
//! assert_eq!(bytes, [0x56, 0x78, 0x12, 0x34]);
//! assert_eq!(to_i32(&bytes, 0, Endianness::CDAB).unwrap(), 0x12345678);
//! ```
//!
//! All operations are synchronous pure functions: they never retain or
//! mutate the caller's buffer and are safe to call from any thread.

pub mod bytes;
pub mod error;
pub mod options;
pub mod text;
pub mod value;

// Re-export core types
pub use bytes::{reorder, Endianness, HalfWord, Scalar, Word};
pub use error::{CodecError, Result};
pub use options::CodecOptions;
pub use text::TextEncoding;
pub use value::{decode_value, decode_values, DataType, Value};
