//! WebAssembly bindings for base62-id
//!
//! Provides JavaScript-friendly API for encoding and decoding.

use wasm_bindgen::prelude::*;

use crate::{DecodeError, InvalidArgumentError};

/// Largest integer a JavaScript number holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Error type for WASM operations
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmError {
    kind: &'static str,
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// One of `invalid_argument`, `invalid_input`, `out_of_range`
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.to_string()
    }

    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<DecodeError> for WasmError {
    fn from(err: DecodeError) -> Self {
        let kind = if err.is_out_of_range() {
            "out_of_range"
        } else {
            "invalid_input"
        };
        Self {
            kind,
            message: plain_message(&err),
        }
    }
}

impl From<InvalidArgumentError> for WasmError {
    fn from(err: InvalidArgumentError) -> Self {
        Self {
            kind: "invalid_argument",
            message: format!("invalid argument {:?}: {}", err.argument, err.reason),
        }
    }
}

/// Single-line message without terminal decoration.
fn plain_message(err: &DecodeError) -> String {
    match err {
        DecodeError::InvalidCharacter { char, position, .. } => {
            format!("invalid character {char:?} at position {position}")
        }
        DecodeError::EmptyInput => "cannot decode empty input".to_string(),
        DecodeError::OutOfRange { length, .. } => {
            format!("{length} character identifier does not fit in 64 bits")
        }
    }
}

/// Encode a `BigInt` as a base62 identifier
#[wasm_bindgen]
pub fn encode(value: u64) -> String {
    crate::encode(value)
}

/// Encode a JavaScript number as a base62 identifier
///
/// The number must be a non-negative integer no larger than
/// `Number.MAX_SAFE_INTEGER`.
#[wasm_bindgen(js_name = encodeNumber)]
pub fn encode_number(value: f64) -> Result<String, WasmError> {
    Ok(crate::encode(value_from_number(value)?))
}

/// Decode a base62 identifier to a `BigInt`
#[wasm_bindgen]
pub fn decode(text: &str) -> Result<u64, WasmError> {
    Ok(crate::decode(text)?)
}

fn value_from_number(value: f64) -> Result<u64, InvalidArgumentError> {
    let reason = if !value.is_finite() {
        "the value should be a finite number"
    } else if value.fract() != 0.0 {
        "the value should be an integer"
    } else if value < 0.0 {
        "negative numbers are not supported"
    } else if value > MAX_SAFE_INTEGER {
        "the value is above Number.MAX_SAFE_INTEGER; pass a BigInt to encode()"
    } else {
        return Ok(value as u64);
    };
    Err(InvalidArgumentError::new(value.to_string(), reason))
}
