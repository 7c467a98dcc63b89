//! Named numeric conversions with byte order support
//!
//! Per-type entry points over the generic codec in [`super::scalar`]:
//! - Raw byte copies (`to_byte`, `to_bytes`)
//! - 16-bit values with a reverse flag (`to_i16`, `from_u16_array`, ...)
//! - 32/64-bit values with an [`Endianness`] (`to_i32`, `from_f64`, ...)
//!
//! 16-bit array readers take an element count. 32/64-bit array readers take
//! a byte length, which must be a multiple of the element width.

use super::endian::Endianness;
use super::scalar::{read_half, read_halves, read_word, read_word_span, region};
use super::scalar::{write_half, write_halves, write_word, write_words};
use crate::error::Result;

// ============================================================================
// Raw Bytes
// ============================================================================

/// Read the byte at `index`
#[inline]
pub fn to_byte(buffer: &[u8], index: usize) -> Result<u8> {
    Ok(region(buffer, index, 1)?[0])
}

/// Copy `length` bytes starting at `index`
pub fn to_bytes(buffer: &[u8], index: usize, length: usize) -> Result<Vec<u8>> {
    Ok(region(buffer, index, length)?.to_vec())
}

// ============================================================================
// 16-bit Conversions
// ============================================================================

macro_rules! half_conversions {
    ($ty:ty, $read:ident, $read_array:ident, $write:ident, $write_array:ident) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `index`; `reverse` swaps the two raw bytes")]
        pub fn $read(buffer: &[u8], index: usize, reverse: bool) -> Result<$ty> {
            read_half(buffer, index, reverse)
        }

        #[doc = concat!("Read `count` consecutive `", stringify!($ty), "` values starting at `index`")]
        pub fn $read_array(buffer: &[u8], index: usize, count: usize, reverse: bool) -> Result<Vec<$ty>> {
            read_halves(buffer, index, count, reverse)
        }

        #[doc = concat!("Encode a `", stringify!($ty), "` (little-endian unless `reverse`)")]
        pub fn $write(value: $ty, reverse: bool) -> Vec<u8> {
            write_half(value, reverse)
        }

        #[doc = concat!("Encode a slice of `", stringify!($ty), "` values back to back")]
        pub fn $write_array(values: &[$ty], reverse: bool) -> Vec<u8> {
            write_halves(values, reverse)
        }
    };
}

half_conversions!(i16, to_i16, to_i16_array, from_i16, from_i16_array);
half_conversions!(u16, to_u16, to_u16_array, from_u16, from_u16_array);

// ============================================================================
// 32/64-bit Conversions
// ============================================================================

macro_rules! word_conversions {
    ($ty:ty, $read:ident, $read_array:ident, $write:ident, $write_array:ident) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `index` stored in `format` word order")]
        pub fn $read(buffer: &[u8], index: usize, format: Endianness) -> Result<$ty> {
            read_word(buffer, index, format)
        }

        #[doc = concat!("Read the `", stringify!($ty), "` values packed in `length` bytes starting at `index`")]
        ///
        /// Fails with `InvalidArgument` when `length` is not a multiple of the
        /// element width.
        pub fn $read_array(buffer: &[u8], index: usize, length: usize, format: Endianness) -> Result<Vec<$ty>> {
            read_word_span(buffer, index, length, format)
        }

        #[doc = concat!("Encode a `", stringify!($ty), "` in `format` word order")]
        pub fn $write(value: $ty, format: Endianness) -> Vec<u8> {
            write_word(value, format)
        }

        #[doc = concat!("Encode a slice of `", stringify!($ty), "` values in `format` word order")]
        pub fn $write_array(values: &[$ty], format: Endianness) -> Vec<u8> {
            write_words(values, format)
        }
    };
}

word_conversions!(i32, to_i32, to_i32_array, from_i32, from_i32_array);
word_conversions!(u32, to_u32, to_u32_array, from_u32, from_u32_array);
word_conversions!(i64, to_i64, to_i64_array, from_i64, from_i64_array);
word_conversions!(u64, to_u64, to_u64_array, from_u64, from_u64_array);
word_conversions!(f32, to_f32, to_f32_array, from_f32, from_f32_array);
word_conversions!(f64, to_f64, to_f64_array, from_f64, from_f64_array);

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::CodecError;

    const SAMPLE: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

    #[test]
    fn test_to_bytes_copies_region() {
        assert_eq!(to_byte(&SAMPLE, 7).unwrap(), 0xF0);
        assert_eq!(to_bytes(&SAMPLE, 2, 3).unwrap(), vec![0x56, 0x78, 0x9A]);
        assert!(to_bytes(&SAMPLE, 6, 3).is_err());
        assert!(to_byte(&SAMPLE, 8).is_err());
    }

    #[test]
    fn test_int64_encode_big_endian() {
        let value = 0x1234567831323334i64;
        assert_eq!(
            from_i64(value, Endianness::ABCD),
            [0x12, 0x34, 0x56, 0x78, 0x31, 0x32, 0x33, 0x34]
        );
        assert_eq!(
            from_i64(value, Endianness::BADC),
            [0x34, 0x12, 0x78, 0x56, 0x32, 0x31, 0x34, 0x33]
        );
    }

    #[test]
    fn test_float_roundtrip() {
        let original = 123.456f32;
        let bytes = from_f32(original, Endianness::ABCD);
        assert_eq!(to_f32(&bytes, 0, Endianness::ABCD).unwrap(), original);

        // 25.0 in IEEE 754: 0x41C80000
        assert_eq!(
            to_f32(&[0x41, 0xC8, 0x00, 0x00], 0, Endianness::ABCD).unwrap(),
            25.0
        );
    }

    #[test]
    fn test_double_array_roundtrip() {
        let values = [1.23, 4.56];
        let bytes = from_f64_array(&values, Endianness::ABCD);
        assert_eq!(bytes.len(), 16);
        assert_eq!(
            to_f64_array(&bytes, 0, bytes.len(), Endianness::ABCD).unwrap(),
            values
        );
    }

    #[test]
    fn test_double_max_dcba() {
        let original = f64::MAX - 1.0;
        let bytes = from_f64(original, Endianness::DCBA);
        assert_eq!(to_f64(&bytes, 0, Endianness::DCBA).unwrap(), original);
    }

    #[test]
    fn test_int32_array_length_validation() {
        let err = to_i32_array(&SAMPLE, 0, 5, Endianness::ABCD).unwrap_err();
        assert!(matches!(err, CodecError::InvalidArgument(_)));

        let values = to_u32_array(&SAMPLE, 0, 8, Endianness::ABCD).unwrap();
        assert_eq!(values, vec![0x12345678, 0x9ABCDEF0]);
    }

    #[test]
    fn test_int16_array_count() {
        let values = to_u16_array(&SAMPLE, 0, 4, true).unwrap();
        assert_eq!(values, vec![0x1234, 0x5678, 0x9ABC, 0xDEF0]);
        assert_eq!(from_u16_array(&values, true), SAMPLE);
        assert!(to_i16_array(&SAMPLE, 2, 4, false).is_err());
    }

    #[test]
    fn test_int16_literal() {
        assert_eq!(from_i16(0x1234, false), [0x34, 0x12]);
        assert_eq!(from_i16(0x1234, true), [0x12, 0x34]);
        assert_eq!(to_i16(&[0xFF, 0xFF], 0, false).unwrap(), -1);
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(matches!(
            to_i32(&SAMPLE, 10, Endianness::ABCD),
            Err(CodecError::OutOfRange { index: 10, len: 4, available: 8 })
        ));
    }
}
