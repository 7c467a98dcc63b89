//! Per-call codec settings
//!
//! Bundles the order and encoding knobs so configuration layers can load them
//! in one piece. Every field falls back to its default when absent.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::bytes::Endianness;
use crate::text::TextEncoding;

/// Order and encoding settings applied by typed value decode/encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Word order for 32/64-bit values
    pub endianness: Endianness,
    /// Swap the two raw bytes of 16-bit values
    ///
    /// Accepts `true`/`false`, `1`/`0` and their string forms
    /// (e.g. `CODEC_REVERSE_16=1`).
    #[serde(deserialize_with = "flag")]
    pub reverse_16: bool,
    /// Text encoding for string values
    pub encoding: TextEncoding,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 32/64-bit word order
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Set the 16-bit reverse flag
    pub fn with_reverse_16(mut self, reverse: bool) -> Self {
        self.reverse_16 = reverse;
        self
    }

    /// Set the string encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(de::Error::custom(format!(
            "flag must be 0 or 1, got {}",
            other
        ))),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            _ => Err(de::Error::custom(format!(
                "flag must be true/false or 0/1, got '{}'",
                text
            ))),
        },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::default();
        assert_eq!(options.endianness, Endianness::ABCD);
        assert!(!options.reverse_16);
        assert_eq!(options.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_partial_deserialize() {
        let options: CodecOptions = serde_json::from_str(r#"{"endianness": "CDAB"}"#).unwrap();
        assert_eq!(options, CodecOptions::new().with_endianness(Endianness::CDAB));

        let options: CodecOptions =
            serde_json::from_str(r#"{"reverse_16": true, "encoding": "latin1"}"#).unwrap();
        assert!(options.reverse_16);
        assert_eq!(options.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_reverse_flag_numeric_forms() {
        for (json, expected) in [
            (r#"{"reverse_16": 1}"#, true),
            (r#"{"reverse_16": 0}"#, false),
            (r#"{"reverse_16": "1"}"#, true),
            (r#"{"reverse_16": "FALSE"}"#, false),
        ] {
            let options: CodecOptions = serde_json::from_str(json).unwrap();
            assert_eq!(options.reverse_16, expected, "{}", json);
        }
        assert!(serde_json::from_str::<CodecOptions>(r#"{"reverse_16": 2}"#).is_err());
        assert!(serde_json::from_str::<CodecOptions>(r#"{"reverse_16": "yes"}"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(serde_json::from_str::<CodecOptions>(r#"{"endianness": "NATIVE"}"#).is_err());
    }
}
