//! Binary data processing utilities
//!
//! Provides word order handling, fixed-width scalar/array codecs and
//! bit extraction over caller-owned byte buffers.
//!
//! # Design Principles
//!
//! - **Stateless**: every operation is a pure function of its inputs
//! - **Type-safe**: `Endianness` enum prevents string typos
//! - **Non-aliasing**: buffers are only read; results are fresh allocations

pub mod bit_ops;
pub mod conversions;
pub mod endian;
pub mod scalar;

pub use bit_ops::*;
pub use conversions::*;
pub use endian::{reorder, Endianness};
pub use scalar::{
    read_half, read_halves, read_word, read_word_span, read_words, write_half, write_halves,
    write_word, write_words, HalfWord, Scalar, Word,
};
