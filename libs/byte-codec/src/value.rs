//! Typed scalar values
//!
//! [`DataType`] tags the supported scalar kinds and [`Value`] carries one
//! decoded scalar. Together they let callers pick the element type at run
//! time (from a point table, a config file or a command line) and still go
//! through the statically typed codec underneath.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bytes::scalar::region;
use crate::bytes::{
    from_bool, from_f32, from_f64, from_i16, from_i32, from_i64, from_u16, from_u32, from_u64,
    to_bool, to_byte, to_f32, to_f64, to_i16, to_i32, to_i64, to_u16, to_u32, to_u64,
};
use crate::error::{CodecError, Result};
use crate::options::CodecOptions;
use crate::text::{decode_string, encode_string};

/// Scalar kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DataType {
    Bool,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
        }
    }

    /// Encoded width in bytes; `None` for variable-length strings
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Byte => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::String => None,
        }
    }

    /// Parse text into a value of this type
    ///
    /// Booleans accept `0`/`1` as well as `true`/`false` in any case. Numbers
    /// use the standard Rust parsers, so overflow is rejected rather than
    /// wrapped. Strings are taken verbatim.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        let invalid = || CodecError::invalid_value(self.as_str(), text);

        let value = match self {
            Self::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "0" | "false" => Value::Bool(false),
                "1" | "true" => Value::Bool(true),
                _ => return Err(invalid()),
            },
            Self::Byte => Value::Byte(trimmed.parse().map_err(|_| invalid())?),
            Self::Int16 => Value::Int16(trimmed.parse().map_err(|_| invalid())?),
            Self::UInt16 => Value::UInt16(trimmed.parse().map_err(|_| invalid())?),
            Self::Int32 => Value::Int32(trimmed.parse().map_err(|_| invalid())?),
            Self::UInt32 => Value::UInt32(trimmed.parse().map_err(|_| invalid())?),
            Self::Int64 => Value::Int64(trimmed.parse().map_err(|_| invalid())?),
            Self::UInt64 => Value::UInt64(trimmed.parse().map_err(|_| invalid())?),
            Self::Float => Value::Float(trimmed.parse().map_err(|_| invalid())?),
            Self::Double => Value::Double(trimmed.parse().map_err(|_| invalid())?),
            Self::String => Value::String(text.to_string()),
        };
        Ok(value)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = CodecError;

    /// Case-insensitive type names plus the Rust primitive spellings
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Bool),
            "byte" | "u8" | "uint8" => Ok(Self::Byte),
            "int16" | "i16" | "short" => Ok(Self::Int16),
            "uint16" | "u16" | "ushort" => Ok(Self::UInt16),
            "int32" | "i32" | "int" => Ok(Self::Int32),
            "uint32" | "u32" | "uint" => Ok(Self::UInt32),
            "int64" | "i64" | "long" => Ok(Self::Int64),
            "uint64" | "u64" | "ulong" => Ok(Self::UInt64),
            "float" | "f32" | "float32" | "single" => Ok(Self::Float),
            "double" | "f64" | "float64" => Ok(Self::Double),
            "string" | "str" | "text" => Ok(Self::String),
            _ => Err(CodecError::invalid_argument(format!("unknown data type '{}'", s))),
        }
    }
}

impl TryFrom<String> for DataType {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One decoded scalar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Bool,
            Self::Byte(_) => DataType::Byte,
            Self::Int16(_) => DataType::Int16,
            Self::UInt16(_) => DataType::UInt16,
            Self::Int32(_) => DataType::Int32,
            Self::UInt32(_) => DataType::UInt32,
            Self::Int64(_) => DataType::Int64,
            Self::UInt64(_) => DataType::UInt64,
            Self::Float(_) => DataType::Float,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
        }
    }

    /// Encode this value with the order/encoding in `options`
    pub fn to_bytes(&self, options: &CodecOptions) -> Result<Vec<u8>> {
        let format = options.endianness;
        let bytes = match self {
            Self::Bool(v) => from_bool(*v),
            Self::Byte(v) => vec![*v],
            Self::Int16(v) => from_i16(*v, options.reverse_16),
            Self::UInt16(v) => from_u16(*v, options.reverse_16),
            Self::Int32(v) => from_i32(*v, format),
            Self::UInt32(v) => from_u32(*v, format),
            Self::Int64(v) => from_i64(*v, format),
            Self::UInt64(v) => from_u64(*v, format),
            Self::Float(v) => from_f32(*v, format),
            Self::Double(v) => from_f64(*v, format),
            Self::String(s) => encode_string(s, options.encoding)?,
        };
        Ok(bytes)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Byte(v) => write!(f, "{}", v),
            Self::Int16(v) => write!(f, "{}", v),
            Self::UInt16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
        }
    }
}

/// Decode one value of `data_type` at `index`
///
/// Strings consume the rest of the buffer from `index`.
pub fn decode_value(
    buffer: &[u8],
    index: usize,
    data_type: DataType,
    options: &CodecOptions,
) -> Result<Value> {
    let format = options.endianness;
    let reverse = options.reverse_16;

    let value = match data_type {
        DataType::Bool => Value::Bool(to_bool(buffer, index)?),
        DataType::Byte => Value::Byte(to_byte(buffer, index)?),
        DataType::Int16 => Value::Int16(to_i16(buffer, index, reverse)?),
        DataType::UInt16 => Value::UInt16(to_u16(buffer, index, reverse)?),
        DataType::Int32 => Value::Int32(to_i32(buffer, index, format)?),
        DataType::UInt32 => Value::UInt32(to_u32(buffer, index, format)?),
        DataType::Int64 => Value::Int64(to_i64(buffer, index, format)?),
        DataType::UInt64 => Value::UInt64(to_u64(buffer, index, format)?),
        DataType::Float => Value::Float(to_f32(buffer, index, format)?),
        DataType::Double => Value::Double(to_f64(buffer, index, format)?),
        DataType::String => {
            let remaining = buffer.len().saturating_sub(index);
            Value::String(decode_string(buffer, index, remaining, options.encoding)?)
        },
    };
    Ok(value)
}

/// Decode `count` consecutive fixed-width values starting at `index`
///
/// The whole run is bounds-checked before anything is decoded. Strings have
/// no fixed width and are rejected.
pub fn decode_values(
    buffer: &[u8],
    index: usize,
    data_type: DataType,
    count: usize,
    options: &CodecOptions,
) -> Result<Vec<Value>> {
    let width = data_type.width().ok_or_else(|| {
        CodecError::invalid_argument(format!("{} has no fixed width", data_type))
    })?;
    let total = width
        .checked_mul(count)
        .ok_or_else(|| CodecError::out_of_range(index, usize::MAX, buffer.len()))?;
    region(buffer, index, total)?;

    (0..count)
        .map(|i| decode_value(buffer, index + i * width, data_type, options))
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::bytes::Endianness;
    use crate::text::TextEncoding;

    #[test]
    fn test_parse_bool_forms() {
        assert_eq!(DataType::Bool.parse_value("1").unwrap(), Value::Bool(true));
        assert_eq!(DataType::Bool.parse_value("0").unwrap(), Value::Bool(false));
        assert_eq!(DataType::Bool.parse_value("True").unwrap(), Value::Bool(true));
        assert!(DataType::Bool.parse_value("yes").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(DataType::Int16.parse_value("-32768").unwrap(), Value::Int16(i16::MIN));
        assert_eq!(DataType::UInt64.parse_value(" 42 ").unwrap(), Value::UInt64(42));
        assert_eq!(DataType::Double.parse_value("1.5").unwrap(), Value::Double(1.5));
        assert_eq!(
            DataType::String.parse_value(" keep ").unwrap(),
            Value::String(" keep ".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_overflow_and_garbage() {
        assert_eq!(
            DataType::Int16.parse_value("70000"),
            Err(CodecError::invalid_value("Int16", "70000"))
        );
        assert!(DataType::Byte.parse_value("-1").is_err());
        assert!(DataType::Float.parse_value("abc").is_err());
    }

    #[test]
    fn test_data_type_names() {
        assert_eq!("i32".parse::<DataType>().unwrap(), DataType::Int32);
        assert_eq!("DOUBLE".parse::<DataType>().unwrap(), DataType::Double);
        assert_eq!("ushort".parse::<DataType>().unwrap(), DataType::UInt16);
        assert!("decimal".parse::<DataType>().is_err());
        assert_eq!(DataType::String.width(), None);
        assert_eq!(DataType::UInt64.width(), Some(8));
    }

    #[test]
    fn test_value_roundtrip_with_options() {
        let options = CodecOptions::new()
            .with_endianness(Endianness::CDAB)
            .with_reverse_16(true)
            .with_encoding(TextEncoding::Utf16Be);

        let values = [
            Value::Bool(true),
            Value::Byte(0xAB),
            Value::Int16(-2),
            Value::UInt16(0xBEEF),
            Value::Int32(-123456),
            Value::UInt32(0xDEADBEEF),
            Value::Int64(i64::MIN),
            Value::UInt64(u64::MAX),
            Value::Float(3.5),
            Value::Double(-0.125),
            Value::String("Grüße".to_string()),
        ];
        for value in values {
            let bytes = value.to_bytes(&options).unwrap();
            let decoded = decode_value(&bytes, 0, value.data_type(), &options).unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn test_decode_value_literal() {
        let options = CodecOptions::default();
        let buf = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(
            decode_value(&buf, 0, DataType::Int32, &options).unwrap(),
            Value::Int32(0x12345678)
        );
        assert_eq!(
            decode_value(&buf, 2, DataType::UInt16, &options).unwrap(),
            Value::UInt16(0x7856)
        );
        assert!(decode_value(&buf, 1, DataType::Int32, &options).is_err());
        assert!(decode_value(&buf, 5, DataType::String, &options).is_err());
    }

    #[test]
    fn test_decode_values() {
        let options = CodecOptions::default();
        let buf = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
        let values = decode_values(&buf, 0, DataType::UInt16, 3, &options.with_reverse_16(true))
            .unwrap();
        assert_eq!(
            values,
            vec![Value::UInt16(1), Value::UInt16(2), Value::UInt16(3)]
        );

        assert!(matches!(
            decode_values(&buf, 0, DataType::UInt16, 4, &options),
            Err(CodecError::OutOfRange { .. })
        ));
        assert!(matches!(
            decode_values(&buf, 0, DataType::String, 1, &options),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_value_display_and_json() {
        assert_eq!(Value::Double(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(serde_json::to_string(&Value::Int32(-7)).unwrap(), "-7");
        assert_eq!(
            serde_json::to_string(&DataType::UInt16).unwrap(),
            "\"UInt16\""
        );
    }
}
