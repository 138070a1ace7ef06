//! The base62 symbol table.
//!
//! Symbols are ordered digits, then lowercase, then uppercase. The order is
//! part of the wire format: identifiers produced with this table only decode
//! correctly against the same table.

/// Radix of the encoding.
pub const BASE: u64 = 62;

/// Symbols indexed by their numeric value.
pub const ALPHABET: &[u8; BASE as usize] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Marker stored in [`INVERSE`] for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// Inverse of [`ALPHABET`], indexed by raw byte value.
static INVERSE: [u8; 256] = build_inverse();

const fn build_inverse() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for a digit value.
///
/// # Panics
///
/// Panics if `value` is not below [`BASE`].
#[inline]
pub fn symbol_at(value: u8) -> char {
    ALPHABET[value as usize] as char
}

/// Returns the digit value of a symbol, or `None` if the symbol is not part
/// of the alphabet.
#[inline]
pub fn value_of(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    value_of_byte(symbol as u8)
}

#[inline]
pub(crate) fn value_of_byte(byte: u8) -> Option<u8> {
    match INVERSE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Whether `c` is one of the 62 symbols.
#[inline]
pub fn is_symbol(c: char) -> bool {
    value_of(c).is_some()
}

/// The alphabet as a string, for error hints.
pub(crate) fn as_str() -> &'static str {
    // ALPHABET is ASCII
    std::str::from_utf8(ALPHABET).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_value_inverse() {
        for i in 0..BASE as u8 {
            assert_eq!(value_of(symbol_at(i)), Some(i));
        }
    }

    #[test]
    fn test_alphabet_order() {
        assert_eq!(symbol_at(0), '0');
        assert_eq!(symbol_at(9), '9');
        assert_eq!(symbol_at(10), 'a');
        assert_eq!(symbol_at(35), 'z');
        assert_eq!(symbol_at(36), 'A');
        assert_eq!(symbol_at(61), 'Z');
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut seen = [false; 256];
        for &b in ALPHABET.iter() {
            assert!(!seen[b as usize], "duplicate symbol {}", b as char);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn test_alphanumerics_are_exactly_the_alphabet() {
        for byte in 0..=255u8 {
            let c = byte as char;
            assert_eq!(
                is_symbol(c),
                c.is_ascii_alphanumeric(),
                "mismatch for byte {byte:#04x}"
            );
        }
    }

    #[test]
    fn test_invalid_marker_is_not_zero() {
        // '0' and an invalid byte must be distinguishable
        assert_eq!(value_of('0'), Some(0));
        assert_eq!(value_of('\0'), None);
        assert_eq!(value_of('-'), None);
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(value_of('é'), None);
        assert_eq!(value_of('Ａ'), None);
        assert_eq!(value_of('🦀'), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(as_str().len(), 62);
        assert!(as_str().starts_with("0123456789abc"));
    }
}
