//! VGA text mode frame buffer for x86_64.
//!
//! Provides a volatile cell grid over the text buffer at 0xB8000.

use core::ptr;
use scutoid_common::Cell;
use scutoid_hal::TextGrid;

/// VGA text buffer memory-mapped I/O address.
pub const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[Cell; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// The 80x25 text frame buffer.
pub struct VgaFrame {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is identity-mapped by the bootloader.
    buffer: *mut Buffer,
}

impl VgaFrame {
    /// Creates a view of the frame buffer.
    ///
    /// # Safety
    ///
    /// Only one `VgaFrame` should be writing at a time; two would race on
    /// the same cells.
    pub unsafe fn new() -> Self {
        VgaFrame {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }

    /// Address of the frame buffer.
    pub fn addr(&self) -> usize {
        self.buffer as usize
    }
}

impl TextGrid for VgaFrame {
    fn width(&self) -> usize {
        BUFFER_WIDTH
    }

    fn height(&self) -> usize {
        BUFFER_HEIGHT
    }

    fn write_cell(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(x < BUFFER_WIDTH && y < BUFFER_HEIGHT, "cell out of bounds");
        // SAFETY: indices are within the buffer and the pointer was valid at
        // construction. Volatile because the display reads this memory.
        unsafe { ptr::write_volatile(&mut (*self.buffer).chars[y][x], cell) }
    }

    fn read_cell(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < BUFFER_WIDTH && y < BUFFER_HEIGHT, "cell out of bounds");
        // SAFETY: as in `write_cell`.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[y][x]) }
    }
}
