//! Scancode to character translation.
//!
//! Set-1 make codes on a US layout, unshifted only. There is no modifier
//! tracking: shift, ctrl and alt produce nothing and letters are always
//! lower case.

/// Make code to character, indexed by scancode. Zero means no character.
const TABLE: [u8; 58] = [
    0, 0, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', b'\x08',
    b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
    0, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`',
    0, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', 0,
    b'*', 0, b' ',
];

/// Translates a make code into a character byte.
///
/// Returns `None` for codes without a table entry, including every release
/// code; the caller is expected to drop releases before getting here.
pub fn translate(scancode: u8) -> Option<u8> {
    match TABLE.get(usize::from(scancode)) {
        Some(&0) | None => None,
        Some(&byte) => Some(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(translate(0x1E), Some(b'a'));
        assert_eq!(translate(0x10), Some(b'q'));
        assert_eq!(translate(0x32), Some(b'm'));
        assert_eq!(translate(0x02), Some(b'1'));
        assert_eq!(translate(0x0B), Some(b'0'));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(translate(0x0E), Some(b'\x08'));
        assert_eq!(translate(0x0F), Some(b'\t'));
        assert_eq!(translate(0x1C), Some(b'\n'));
        assert_eq!(translate(0x39), Some(b' '));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(translate(0x0C), Some(b'-'));
        assert_eq!(translate(0x28), Some(b'\''));
        assert_eq!(translate(0x29), Some(b'`'));
        assert_eq!(translate(0x2B), Some(b'\\'));
        assert_eq!(translate(0x35), Some(b'/'));
        assert_eq!(translate(0x37), Some(b'*'));
    }

    #[test]
    fn test_keys_without_characters() {
        // escape, ctrl, left shift, right shift, alt
        for code in [0x00, 0x01, 0x1D, 0x2A, 0x36, 0x38] {
            assert_eq!(translate(code), None, "scancode {:#04x}", code);
        }
    }

    #[test]
    fn test_out_of_table() {
        assert_eq!(translate(0x3A), None);
        assert_eq!(translate(0x7F), None);
        assert_eq!(translate(0x9E), None);
        assert_eq!(translate(0xFF), None);
    }
}
