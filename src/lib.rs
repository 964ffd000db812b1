//! Lowercase hex encoding of octet strings and lists of octet strings.
//!
//! The free functions use the default configuration: lists are joined with
//! `,` and characters above U+00FF are rejected. Build an [`Encoder`] from
//! [`InitArgs`] to change either.

mod constants;
mod encoder;
mod error;
pub mod logs;
mod types;
mod validate;

pub use crate::constants::*;
pub use crate::encoder::{to_bytes, Encoder};
pub use crate::error::EncodeError;
pub use crate::types::{EncoderConfig, LogFilter};
pub use octet_hex_types::{HexString, InitArgs, OctetInput, WideCharPolicy};

use std::borrow::Cow;

pub fn to_hex(value: &OctetInput) -> Result<String, EncodeError> {
    Encoder::default().to_hex(value)
}

pub fn to_hex_string(value: &OctetInput) -> Result<String, EncodeError> {
    Encoder::default().to_hex_string(value)
}

pub fn from_hex(hex: &str) -> Result<Vec<u8>, EncodeError> {
    Encoder::default().from_hex(hex)
}

pub fn from_hex_list(hex: &str) -> Result<Vec<Vec<u8>>, EncodeError> {
    Encoder::default().from_hex_list(hex)
}

/// Same as [`to_bytes`], returning an owned buffer.
pub fn to_byte_vec(value: &OctetInput) -> Result<Vec<u8>, EncodeError> {
    to_bytes(value).map(Cow::into_owned)
}
