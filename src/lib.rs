//! Base62 identifiers for 64-bit unsigned integers.
//!
//! Values are written with the symbols `0-9`, `a-z`, `A-Z` (in that order),
//! most significant symbol first. Every `u64` has exactly one encoding of at
//! most [`MAX_LEN`] symbols, and [`decode`] accepts exactly those strings
//! (plus redundant leading zeros) back.
//!
//! ```
//! assert_eq!(base62_id::encode(62), "10");
//! assert_eq!(base62_id::decode("10"), Ok(62));
//! assert!(base62_id::decode("no spaces").is_err());
//! ```

mod core;
mod encoders;

pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::alphabet::{self, ALPHABET, BASE};
pub use crate::core::config::{CONFIG_FILE_NAME, Config, ConfigFile, LogLevel, Settings, SettingsLayer};
pub use encoders::radix::{MAX_LEN, decode, encode, encode_into, parse_value};
pub use encoders::{DecodeError, InvalidArgumentError};
