//! Fixed-width scalar codec
//!
//! Generic read/write of fixed-width numeric values and homogeneous arrays of
//! them. Two order controls exist:
//! - 16-bit types ([`HalfWord`]) take a boolean `reverse` flag that swaps the
//!   two raw bytes before a native (little-endian) decode.
//! - 32/64-bit types ([`Word`]) take an [`Endianness`] and go through the
//!   endian reorderer before a native decode.
//!
//! Array elements are transformed independently; bytes never cross element
//! boundaries. The caller's buffer is only ever read.

use tracing::debug;

use super::endian::{reorder_4, reorder_8, Endianness};
use crate::error::{CodecError, Result};

/// Fixed-width numeric value with a native (little-endian) byte image
pub trait Scalar: Copy {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Byte image of one value
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn from_native(bytes: Self::Bytes) -> Self;

    fn to_native(self) -> Self::Bytes;
}

/// 16-bit scalar; order controlled by a two-state reverse flag
pub trait HalfWord: Scalar {}

/// 32/64-bit scalar; order controlled by the four-way [`Endianness`]
pub trait Word: Scalar {
    /// Apply the word-order permutation to one byte image
    fn reorder(bytes: Self::Bytes, format: Endianness) -> Self::Bytes;
}

macro_rules! impl_scalar {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                #[inline]
                fn from_native(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                #[inline]
                fn to_native(self) -> Self::Bytes {
                    self.to_le_bytes()
                }
            }
        )*
    };
}

macro_rules! impl_word {
    ($($ty:ty => $reorder:ident),* $(,)?) => {
        $(
            impl Word for $ty {
                #[inline]
                fn reorder(bytes: Self::Bytes, format: Endianness) -> Self::Bytes {
                    $reorder(bytes, format)
                }
            }
        )*
    };
}

impl_scalar!(
    i16 => 2, u16 => 2,
    i32 => 4, u32 => 4, f32 => 4,
    i64 => 8, u64 => 8, f64 => 8,
);

impl HalfWord for i16 {}
impl HalfWord for u16 {}

impl_word!(
    i32 => reorder_4, u32 => reorder_4, f32 => reorder_4,
    i64 => reorder_8, u64 => reorder_8, f64 => reorder_8,
);

// ============================================================================
// Bounds Checks
// ============================================================================

/// Borrow `len` bytes starting at `index`, or fail with `OutOfRange`
pub(crate) fn region(buffer: &[u8], index: usize, len: usize) -> Result<&[u8]> {
    index
        .checked_add(len)
        .and_then(|end| buffer.get(index..end))
        .ok_or_else(|| {
            debug!(index, len, available = buffer.len(), "buffer region out of range");
            CodecError::out_of_range(index, len, buffer.len())
        })
}

/// Borrow the run backing `count` elements of `width` bytes each
fn element_run(buffer: &[u8], index: usize, width: usize, count: usize) -> Result<&[u8]> {
    let len = width
        .checked_mul(count)
        .ok_or_else(|| CodecError::out_of_range(index, usize::MAX, buffer.len()))?;
    region(buffer, index, len)
}

/// Convert a byte length into an element count, rejecting partial elements
pub(crate) fn elements_in(byte_len: usize, width: usize) -> Result<usize> {
    if byte_len % width != 0 {
        debug!(byte_len, width, "byte length is not a whole number of elements");
        return Err(CodecError::invalid_argument(format!(
            "length {} must be a multiple of {}",
            byte_len, width
        )));
    }
    Ok(byte_len / width)
}

#[inline]
fn image<T: Scalar>(chunk: &[u8]) -> T::Bytes {
    let mut bytes = T::Bytes::default();
    bytes.as_mut().copy_from_slice(chunk);
    bytes
}

// ============================================================================
// 16-bit Codec
// ============================================================================

#[inline]
fn decode_half<T: HalfWord>(chunk: &[u8], reverse: bool) -> T {
    let mut bytes = image::<T>(chunk);
    if reverse {
        bytes.as_mut().reverse();
    }
    T::from_native(bytes)
}

/// Read one 16-bit value at `index`
pub fn read_half<T: HalfWord>(buffer: &[u8], index: usize, reverse: bool) -> Result<T> {
    let chunk = region(buffer, index, T::WIDTH)?;
    Ok(decode_half(chunk, reverse))
}

/// Read `count` consecutive 16-bit values starting at `index`
pub fn read_halves<T: HalfWord>(
    buffer: &[u8],
    index: usize,
    count: usize,
    reverse: bool,
) -> Result<Vec<T>> {
    let run = element_run(buffer, index, T::WIDTH, count)?;
    Ok(run
        .chunks_exact(T::WIDTH)
        .map(|chunk| decode_half(chunk, reverse))
        .collect())
}

/// Encode one 16-bit value
pub fn write_half<T: HalfWord>(value: T, reverse: bool) -> Vec<u8> {
    write_halves(&[value], reverse)
}

/// Encode a slice of 16-bit values back to back
pub fn write_halves<T: HalfWord>(values: &[T], reverse: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    for value in values {
        let mut bytes = value.to_native();
        if reverse {
            bytes.as_mut().reverse();
        }
        out.extend_from_slice(bytes.as_ref());
    }
    out
}

// ============================================================================
// 32/64-bit Codec
// ============================================================================

#[inline]
fn decode_word<T: Word>(chunk: &[u8], format: Endianness) -> T {
    T::from_native(T::reorder(image::<T>(chunk), format))
}

/// Read one 32/64-bit value at `index`
///
/// # Examples
/// ```
/// use byte_codec::bytes::{read_word, Endianness};
///
/// let buf = [0x12, 0x34, 0x56, 0x78];
/// let value: u32 = read_word(&buf, 0, Endianness::ABCD).unwrap();
/// assert_eq!(value, 0x12345678);
/// let value: u32 = read_word(&buf, 0, Endianness::DCBA).unwrap();
/// assert_eq!(value, 0x78563412);
/// ```
pub fn read_word<T: Word>(buffer: &[u8], index: usize, format: Endianness) -> Result<T> {
    let chunk = region(buffer, index, T::WIDTH)?;
    Ok(decode_word(chunk, format))
}

/// Read `count` consecutive 32/64-bit values starting at `index`
pub fn read_words<T: Word>(
    buffer: &[u8],
    index: usize,
    count: usize,
    format: Endianness,
) -> Result<Vec<T>> {
    let run = element_run(buffer, index, T::WIDTH, count)?;
    Ok(run
        .chunks_exact(T::WIDTH)
        .map(|chunk| decode_word(chunk, format))
        .collect())
}

/// Read the values packed in `byte_len` bytes starting at `index`
///
/// `byte_len` must be a multiple of the element width, otherwise the call
/// fails with `InvalidArgument` naming the required multiple.
pub fn read_word_span<T: Word>(
    buffer: &[u8],
    index: usize,
    byte_len: usize,
    format: Endianness,
) -> Result<Vec<T>> {
    let count = elements_in(byte_len, T::WIDTH)?;
    read_words(buffer, index, count, format)
}

/// Encode one 32/64-bit value
pub fn write_word<T: Word>(value: T, format: Endianness) -> Vec<u8> {
    write_words(&[value], format)
}

/// Encode a slice of 32/64-bit values back to back
pub fn write_words<T: Word>(values: &[T], format: Endianness) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    for value in values {
        out.extend_from_slice(T::reorder(value.to_native(), format).as_ref());
    }
    out
}
