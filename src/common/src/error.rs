//! Error types for ScutoidOS.
//!
//! Runtime console and shell operations never fail; these errors only come
//! out of construction and validation paths.

use core::fmt;

/// Console subsystem error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsoleError {
    /// Grid dimensions cannot back a console.
    ///
    /// Both sides must be non-zero and the cell count must fit the 16-bit
    /// hardware cursor register.
    InvalidGeometry {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
    /// A cell coordinate lies outside the grid.
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// A byte that does not name one of the 16 text-mode colors.
    InvalidColor(u8),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidGeometry { width, height } => {
                write!(f, "invalid console geometry {}x{}", width, height)
            }
            ConsoleError::OutOfBounds { x, y } => write!(f, "cell ({}, {}) out of bounds", x, y),
            ConsoleError::InvalidColor(value) => write!(f, "invalid color value {:#04x}", value),
        }
    }
}
