//! Byte codec error types

use thiserror::Error;

/// Result type for byte-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
///
/// Every failure is raised at the call that detects it; the codec never
/// returns partial results or silently truncates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Read or write would run past the end of the buffer
    #[error("Out of range: {len} byte(s) at index {index} exceed buffer of {available} byte(s)")]
    OutOfRange {
        index: usize,
        len: usize,
        available: usize,
    },

    /// Word reorder requested on something other than 4 or 8 bytes
    #[error("Invalid length: word reorder needs 4 or 8 bytes, got {0}")]
    InvalidLength(usize),

    /// Endianness code or name outside the four defined variants
    #[error("Unsupported endian format: {0}")]
    UnsupportedFormat(String),

    /// Bad call argument (e.g. byte length not a multiple of the element width)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed text input or bytes that do not fit the named encoding
    #[error("Encoding failure: {0}")]
    EncodingFailure(String),

    /// Text that cannot be parsed as the requested data type
    #[error("Invalid {data_type} value: '{value}'")]
    InvalidValue { data_type: String, value: String },
}

// Helper methods for creating errors
impl CodecError {
    pub fn out_of_range(index: usize, len: usize, available: usize) -> Self {
        CodecError::OutOfRange {
            index,
            len,
            available,
        }
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        CodecError::UnsupportedFormat(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CodecError::InvalidArgument(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        CodecError::EncodingFailure(msg.into())
    }

    pub fn invalid_value(data_type: impl Into<String>, value: impl Into<String>) -> Self {
        CodecError::InvalidValue {
            data_type: data_type.into(),
            value: value.into(),
        }
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::EncodingFailure(format!("hex: {}", err))
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        CodecError::EncodingFailure(format!("base64: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CodecError::out_of_range(10, 4, 8);
        assert_eq!(
            err.to_string(),
            "Out of range: 4 byte(s) at index 10 exceed buffer of 8 byte(s)"
        );

        let err = CodecError::InvalidLength(3);
        assert!(err.to_string().contains("got 3"));

        let err = CodecError::invalid_value("Int16", "70000");
        assert_eq!(err.to_string(), "Invalid Int16 value: '70000'");
    }

    #[test]
    fn test_from_hex_error() {
        let err: CodecError = hex::FromHexError::OddLength.into();
        assert!(matches!(err, CodecError::EncodingFailure(_)));
    }
}
