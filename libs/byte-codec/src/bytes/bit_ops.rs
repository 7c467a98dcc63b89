//! Bit-level operations on byte buffers
//!
//! Provides boolean extraction from byte arrays and the matching encoders.
//! Common use cases:
//! - Coil/discrete input status packed MSB-first into bytes
//! - Single flag bytes (0x00 / 0x01)
//! - Status register bit inspection

use tracing::debug;

use super::scalar::region;
use crate::error::{CodecError, Result};

/// Read a flag byte: true iff the least significant bit at `index` is set
#[inline]
pub fn to_bool(buffer: &[u8], index: usize) -> Result<bool> {
    let byte = region(buffer, index, 1)?[0];
    Ok(byte & 0x01 == 0x01)
}

/// Read the bit at `byte_index * 8 + bit_offset` (bit offset 0 = LSB)
pub fn bit_at(buffer: &[u8], byte_index: usize, bit_offset: u8) -> Result<bool> {
    if bit_offset >= 8 {
        debug!(bit_offset, "bit offset out of range");
        return Err(CodecError::invalid_argument(format!(
            "bit offset {} must be below 8",
            bit_offset
        )));
    }
    let byte = region(buffer, byte_index, 1)?[0];
    Ok(byte & (1 << bit_offset) != 0)
}

/// Extract `length` bits starting at byte `index`, MSB-first within each byte
///
/// Reads `ceil(length / 8)` bytes. When `reverse` is set the byte run is
/// reversed before the bits are unpacked. Output bit `i` is bit `7 - i % 8`
/// of byte `i / 8` of the (possibly reversed) run.
///
/// # Examples
/// ```
/// use byte_codec::bytes::to_bool_array;
///
/// let bits = to_bool_array(&[0b1010_1010], 0, 4, false).unwrap();
/// assert_eq!(bits, vec![true, false, true, false]);
/// ```
pub fn to_bool_array(buffer: &[u8], index: usize, length: usize, reverse: bool) -> Result<Vec<bool>> {
    let byte_len = length.div_ceil(8);
    let mut run = region(buffer, index, byte_len)?.to_vec();
    if reverse {
        run.reverse();
    }

    Ok((0..length)
        .map(|i| run[i / 8] & (1 << (7 - i % 8)) != 0)
        .collect())
}

/// Pack booleans MSB-first into bytes; inverse of [`to_bool_array`]
///
/// The final byte is zero-padded in its low bits. When `reverse` is set the
/// packed byte run is reversed afterwards.
pub fn pack_bools(bits: &[bool], reverse: bool) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            out[i / 8] |= 1 << (7 - i % 8);
        }
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Encode a bool as a single flag byte (0x00 / 0x01)
#[inline]
pub fn from_bool(value: bool) -> Vec<u8> {
    vec![u8::from(value)]
}

/// Encode each bool as its own flag byte
pub fn from_bools(values: &[bool]) -> Vec<u8> {
    values.iter().map(|&value| u8::from(value)).collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_to_bool_lsb_only() {
        let data = [0x00, 0x01, 0xFE, 0xFF];
        assert!(!to_bool(&data, 0).unwrap());
        assert!(to_bool(&data, 1).unwrap());
        assert!(!to_bool(&data, 2).unwrap());
        assert!(to_bool(&data, 3).unwrap());
        assert!(matches!(
            to_bool(&data, 4),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bit_at() {
        let data = [0b1010_1100, 0b0000_0001];
        assert!(!bit_at(&data, 0, 0).unwrap());
        assert!(bit_at(&data, 0, 2).unwrap());
        assert!(bit_at(&data, 0, 7).unwrap());
        assert!(bit_at(&data, 1, 0).unwrap());
        assert!(matches!(
            bit_at(&data, 0, 8),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(bit_at(&data, 2, 0).is_err());
    }

    #[test]
    fn test_to_bool_array_msb_first() {
        let bits = to_bool_array(&[0b1010_1010], 0, 8, false).unwrap();
        assert_eq!(
            bits,
            vec![true, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_to_bool_array_partial_and_offset() {
        let data = [0xFF, 0b1100_0000, 0b1000_0000];
        let bits = to_bool_array(&data, 1, 10, false).unwrap();
        assert_eq!(bits.len(), 10);
        assert_eq!(&bits[..3], &[true, true, false]);
        assert!(bits[8]);
        assert!(!bits[9]);
    }

    #[test]
    fn test_to_bool_array_reverse() {
        let data = [0x00, 0xF0];
        let bits = to_bool_array(&data, 0, 12, true).unwrap();
        assert_eq!(&bits[..4], &[true; 4]);
        assert!(bits[4..].iter().all(|b| !b));
    }

    #[test]
    fn test_to_bool_array_bounds() {
        let data = [0u8; 2];
        assert!(to_bool_array(&data, 0, 16, false).is_ok());
        assert!(to_bool_array(&data, 0, 17, false).is_err());
        assert!(to_bool_array(&data, 2, 0, false).unwrap().is_empty());
    }

    #[test]
    fn test_pack_bools_roundtrip() {
        let bits = [true, false, true, true, false, false, true, false, true, true];
        for reverse in [false, true] {
            let packed = pack_bools(&bits, reverse);
            assert_eq!(packed.len(), 2);
            assert_eq!(to_bool_array(&packed, 0, bits.len(), reverse).unwrap(), bits);
        }
    }

    #[test]
    fn test_from_bools() {
        assert_eq!(from_bool(true), vec![0x01]);
        assert_eq!(from_bool(false), vec![0x00]);
        assert_eq!(from_bools(&[true, false, true]), vec![1, 0, 1]);
    }
}
