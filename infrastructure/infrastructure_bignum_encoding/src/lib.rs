//! Infrastructure Layer: Bignum Encoding
//!
//! Provides encoding and decoding of arbitrary precision integers in the big
//! integer layouts of the Erlang External Term Format.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer in
//! the CLEAN architecture. The ETF codec delegates every integer that does not fit in
//! 32 bits on the wire to this crate.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Codec for malachite `Integer` values
//!   (SMALL_BIG_EXT and LARGE_BIG_EXT).
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html): ETF codec

mod common;

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};

// Re-export byte conversion helpers and tags
pub use common::{bytes_to_integer, integer_to_bytes, LARGE_BIG_EXT, SMALL_BIG_EXT};
