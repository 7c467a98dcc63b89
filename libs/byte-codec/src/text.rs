//! Text renderings of byte buffers
//!
//! - Hex (lowercase, no separators), base64 (standard alphabet, padded),
//!   binary strings (8 chars per byte, MSB first) and ASCII
//! - XOR checksum over a whole buffer
//! - Named text encodings for string decode/encode over a buffer region

use std::fmt::Write;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bytes::scalar::region;
use crate::error::{CodecError, Result};

// ============================================================================
// Hex / Base64 / Binary / ASCII
// ============================================================================

/// Encode bytes to a lowercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234ab"
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Encode a single byte as two lowercase hex digits
pub fn byte_to_hex_string(byte: u8) -> String {
    format!("{:02x}", byte)
}

/// Decode a hex string (either case, no separators)
pub fn from_hex_string(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| {
        debug!(error = %e, "hex decode failed");
        e.into()
    })
}

/// Encode bytes with the standard base64 alphabet
pub fn to_base64_string(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64 text
pub fn from_base64_string(text: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD.decode(text).map_err(|e| {
        debug!(error = %e, "base64 decode failed");
        e.into()
    })
}

/// Render a single byte as eight '0'/'1' characters, MSB first
pub fn byte_to_bin_string(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Render every byte as eight '0'/'1' characters, concatenated
pub fn to_bin_string(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "{:08b}", byte);
    }
    result
}

/// Map each byte to one ASCII character; bytes above 0x7F become '?'
pub fn to_ascii_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
        .collect()
}

/// Map a single byte to the character with the same code point
pub fn byte_to_ascii_string(byte: u8) -> String {
    char::from(byte).to_string()
}

/// XOR of every byte; an empty buffer yields 0
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, &b| acc ^ b)
}

// ============================================================================
// Named Text Encodings
// ============================================================================

/// Named text encoding used for string decode/encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Strict 7-bit ASCII; bytes above 0x7F fail with `EncodingFailure`.
    /// [`to_ascii_string`] is the lossy rendering that maps them to '?'.
    #[serde(rename = "ascii")]
    Ascii,
    #[serde(rename = "latin1")]
    Latin1,
    #[serde(rename = "utf-16le")]
    Utf16Le,
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin1",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        }
    }

    /// Decode bytes into text; bytes invalid under this encoding fail
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| encoding_failure(*self, e)),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(encoding_failure(
                    *self,
                    format!("byte 0x{:02x} at {} is not ASCII", bytes[pos], pos),
                )),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Utf16Le | Self::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(encoding_failure(
                        *self,
                        format!("odd byte length {}", bytes.len()),
                    ));
                }
                let big_endian = *self == Self::Utf16Be;
                let units = bytes.chunks_exact(2).map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if big_endian {
                        u16::from_be_bytes(pair)
                    } else {
                        u16::from_le_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<std::result::Result<String, _>>()
                    .map_err(|e| encoding_failure(*self, e))
            },
        }
    }

    /// Encode text; characters this encoding cannot represent fail
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Ascii => {
                if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
                    return Err(encoding_failure(*self, format!("'{}' is not ASCII", c)));
                }
                Ok(text.as_bytes().to_vec())
            },
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        encoding_failure(*self, format!("'{}' is outside Latin-1", c))
                    })
                })
                .collect(),
            Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        }
    }
}

fn encoding_failure(encoding: TextEncoding, detail: impl std::fmt::Display) -> CodecError {
    debug!(%encoding, %detail, "text encoding failure");
    CodecError::encoding(format!("{}: {}", encoding, detail))
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "utf8" => Ok(Self::Utf8),
            "ascii" | "usascii" => Ok(Self::Ascii),
            "latin1" | "iso88591" => Ok(Self::Latin1),
            "utf16le" | "utf16" | "unicode" => Ok(Self::Utf16Le),
            "utf16be" | "bigendianunicode" => Ok(Self::Utf16Be),
            _ => Err(CodecError::encoding(format!("unknown text encoding '{}'", s))),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Decode `length` bytes starting at `index` as text
pub fn decode_string(
    buffer: &[u8],
    index: usize,
    length: usize,
    encoding: TextEncoding,
) -> Result<String> {
    encoding.decode(region(buffer, index, length)?)
}

/// Encode text into a fresh buffer
pub fn encode_string(text: &str, encoding: TextEncoding) -> Result<Vec<u8>> {
    encoding.encode(text)
}
