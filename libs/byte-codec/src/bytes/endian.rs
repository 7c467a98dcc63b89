//! Word order representation and the endian reorderer
//!
//! Four fixed word orders describe how a 4-byte or 8-byte group stored in a
//! buffer maps onto a logical value. Every multi-byte numeric decode goes
//! through [`reorder`] first and then reads the result as native
//! (little-endian) bytes, so one decode routine serves all four layouts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};

/// Word order of a 32-bit or 64-bit value inside a buffer
///
/// # Naming Convention
/// Uses ABCD notation where:
/// - A = Most significant byte (MSB)
/// - B = Second byte
/// - C = Third byte
/// - D = Least significant byte (LSB)
///
/// For 32-bit value `0x12345678` encoded into a buffer:
/// - `ABCD`: [0x12, 0x34, 0x56, 0x78]
/// - `BADC`: [0x34, 0x12, 0x78, 0x56]
/// - `CDAB`: [0x56, 0x78, 0x12, 0x34]
/// - `DCBA`: [0x78, 0x56, 0x34, 0x12]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Endianness {
    /// Big-endian (most significant byte first)
    #[default]
    ABCD,

    /// Byte swap within each 16-bit half, PDP-11 style mid-endian
    BADC,

    /// Halves swapped, Honeywell 316 style mid-endian
    CDAB,

    /// Little-endian (least significant byte first)
    DCBA,
}

const ABCD_4: [usize; 4] = [3, 2, 1, 0];
const BADC_4: [usize; 4] = [2, 3, 0, 1];
const CDAB_4: [usize; 4] = [1, 0, 3, 2];
const DCBA_4: [usize; 4] = [0, 1, 2, 3];

const ABCD_8: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const BADC_8: [usize; 8] = [6, 7, 4, 5, 2, 3, 0, 1];
const CDAB_8: [usize; 8] = [1, 0, 3, 2, 5, 4, 7, 6];
const DCBA_8: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

impl Endianness {
    /// All supported word orders
    pub const ALL: [Endianness; 4] = [Self::ABCD, Self::BADC, Self::CDAB, Self::DCBA];

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ABCD => "ABCD",
            Self::BADC => "BADC",
            Self::CDAB => "CDAB",
            Self::DCBA => "DCBA",
        }
    }

    /// Numeric code used by configuration files and device tables (1..=4)
    pub fn code(&self) -> u8 {
        match self {
            Self::ABCD => 1,
            Self::BADC => 2,
            Self::CDAB => 3,
            Self::DCBA => 4,
        }
    }

    /// Source index for every destination byte of a 4-byte group
    fn permutation_4(&self) -> &'static [usize; 4] {
        match self {
            Self::ABCD => &ABCD_4,
            Self::BADC => &BADC_4,
            Self::CDAB => &CDAB_4,
            Self::DCBA => &DCBA_4,
        }
    }

    /// Source index for every destination byte of an 8-byte group
    fn permutation_8(&self) -> &'static [usize; 8] {
        match self {
            Self::ABCD => &ABCD_8,
            Self::BADC => &BADC_8,
            Self::CDAB => &CDAB_8,
            Self::DCBA => &DCBA_8,
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = CodecError;

    /// Parse common string representations
    ///
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → ABCD
    /// - "BADC", "BA-DC" → BADC
    /// - "CDAB", "CD-AB" → CDAB
    /// - "DCBA", "DC-BA", "LE", "LITTLE_ENDIAN" → DCBA
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" | "ABCDEFGH" => Ok(Self::ABCD),
            "BADC" | "BADCFEHG" => Ok(Self::BADC),
            "CDAB" | "GHEFCDAB" => Ok(Self::CDAB),
            "DCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" | "HGFEDCBA" => Ok(Self::DCBA),
            _ => Err(CodecError::unsupported_format(s)),
        }
    }
}

impl TryFrom<String> for Endianness {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<u8> for Endianness {
    type Error = CodecError;

    /// Map a numeric code; 0 (native) and anything above 4 are rejected
    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::ABCD),
            2 => Ok(Self::BADC),
            3 => Ok(Self::CDAB),
            4 => Ok(Self::DCBA),
            other => {
                debug!(code = other, "rejected endian format code");
                Err(CodecError::unsupported_format(format!("code {}", other)))
            },
        }
    }
}

/// Rearrange a 4-byte group; infallible form used by the scalar codec
pub(crate) fn reorder_4(word: [u8; 4], format: Endianness) -> [u8; 4] {
    let map = format.permutation_4();
    std::array::from_fn(|i| word[map[i]])
}

/// Rearrange an 8-byte group; infallible form used by the scalar codec
pub(crate) fn reorder_8(word: [u8; 8], format: Endianness) -> [u8; 8] {
    let map = format.permutation_8();
    std::array::from_fn(|i| word[map[i]])
}

/// Rearrange a 4-byte or 8-byte group according to `format`
///
/// The result is always a permutation of the input: no byte is dropped,
/// duplicated or altered. The input slice is left untouched.
///
/// # Examples
/// ```
/// use byte_codec::bytes::{reorder, Endianness};
///
/// let out = reorder(&[0x12, 0x34, 0x56, 0x78], Endianness::BADC).unwrap();
/// assert_eq!(out, vec![0x56, 0x78, 0x12, 0x34]);
/// ```
pub fn reorder(bytes: &[u8], format: Endianness) -> Result<Vec<u8>> {
    if let Ok(word) = <[u8; 4]>::try_from(bytes) {
        return Ok(reorder_4(word, format).to_vec());
    }
    if let Ok(word) = <[u8; 8]>::try_from(bytes) {
        return Ok(reorder_8(word, format).to_vec());
    }

    debug!(len = bytes.len(), %format, "word reorder rejected");
    Err(CodecError::InvalidLength(bytes.len()))
}
