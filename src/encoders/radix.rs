use crate::core::alphabet::{self, ALPHABET, BASE};

pub use super::errors::{DecodeError, InvalidArgumentError};

/// Longest encoded form of a `u64`. `62^11 > 2^64`, so eleven symbols always
/// suffice.
pub const MAX_LEN: usize = 11;

/// Encodes `value` as base62, most significant symbol first.
///
/// Zero encodes to `"0"`; no other value has a leading `'0'`.
pub fn encode(value: u64) -> String {
    let mut buf = [0u8; MAX_LEN];
    encode_into(value, &mut buf).to_owned()
}

/// Encodes `value` into `buf` without allocating and returns the encoded
/// text, which occupies the tail of the buffer.
pub fn encode_into(mut value: u64, buf: &mut [u8; MAX_LEN]) -> &str {
    let mut start = buf.len();

    // Runs at least once so that zero encodes to a single symbol
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 {
            break;
        }
    }

    let encoded = &buf[start..];
    debug_assert!(encoded.is_ascii());
    // SAFETY: only ASCII alphabet bytes were written to this range
    unsafe { std::str::from_utf8_unchecked(encoded) }
}

/// Decodes a base62 identifier.
///
/// # Errors
///
/// - [`DecodeError::EmptyInput`] if `encoded` is empty.
/// - [`DecodeError::InvalidCharacter`] for the first character outside the
///   alphabet.
/// - [`DecodeError::OutOfRange`] if `encoded` is longer than [`MAX_LEN`] or
///   names a value above `u64::MAX`.
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut value: u64 = 0;
    let mut overflowed = false;

    for (position, c) in encoded.char_indices() {
        let digit = alphabet::value_of(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, alphabet::as_str())
        })?;

        // Keep scanning after overflow so a bad character is still reported
        // as malformed input.
        if !overflowed {
            match value
                .checked_mul(BASE)
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }
    }

    // Every char is ASCII by now, so byte length is char count
    if overflowed || encoded.len() > MAX_LEN {
        return Err(DecodeError::out_of_range(encoded));
    }

    Ok(value)
}

/// Parses a decimal integer supplied by a caller.
///
/// Surrounding whitespace is ignored. Anything that is not a plain
/// non-negative integer no larger than `u64::MAX` is rejected.
pub fn parse_value(text: &str) -> Result<u64, InvalidArgumentError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(InvalidArgumentError::new(text, "a value is required"));
    }
    if trimmed.starts_with('-') {
        return Err(InvalidArgumentError::new(
            text,
            "negative numbers are not supported",
        ));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidArgumentError::new(text, "the value should be an integer"));
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| InvalidArgumentError::new(text, "the value does not fit in 64 bits"))
}
