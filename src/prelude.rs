//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base62_id::prelude::*;
//!
//! let mut buf = [0u8; MAX_LEN];
//! assert_eq!(encode_into(3843, &mut buf), "ZZ");
//! assert_eq!(decode("ZZ"), Ok(3843));
//! ```

pub use crate::{
    // Errors
    DecodeError,
    InvalidArgumentError,
    MAX_LEN,

    // Core encoding/decoding
    decode,
    encode,
    encode_into,

    // Boundary parsing
    parse_value,
};
