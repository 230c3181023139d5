//! Frame-buffer cell layout.

use crate::color::Attribute;

/// A single character cell: glyph byte followed by attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Cell {
    /// Character byte.
    pub glyph: u8,
    /// Packed foreground/background color.
    pub attribute: Attribute,
}

const _: () = assert!(core::mem::size_of::<Cell>() == 2);

impl Cell {
    /// Creates a cell.
    pub const fn new(glyph: u8, attribute: Attribute) -> Cell {
        Cell { glyph, attribute }
    }

    /// A space in the given color.
    pub const fn blank(attribute: Attribute) -> Cell {
        Cell::new(b' ', attribute)
    }
}
