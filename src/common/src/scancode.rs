//! Raw keyboard scancodes.

use bitflags::bitflags;

bitflags! {
    /// Flag bits carried in a set-1 scancode byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ScancodeFlags: u8 {
        /// Key-release (break) code.
        const RELEASE = 1 << 7;
    }
}

/// A raw scancode byte as delivered by the keyboard controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scancode(u8);

impl Scancode {
    /// Wraps a raw byte.
    pub const fn new(raw: u8) -> Self {
        Scancode(raw)
    }

    /// Flag bits of this scancode.
    pub fn flags(self) -> ScancodeFlags {
        ScancodeFlags::from_bits_truncate(self.0)
    }

    /// True for key-release (break) codes.
    pub fn is_release(self) -> bool {
        self.flags().contains(ScancodeFlags::RELEASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_bit() {
        assert!(!Scancode::new(0x1E).is_release());
        assert!(Scancode::new(0x9E).is_release());
        assert!(Scancode::new(0x80).is_release());
        assert!(!Scancode::new(0x7F).is_release());
    }
}
