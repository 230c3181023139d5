//! ScutoidOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.
//! The console and shell are written against these so they run unchanged on
//! the VGA frame buffer and on in-memory test doubles.

#![no_std]

use core::fmt;
use scutoid_common::{Attribute, Cell};

/// A rectangular grid of character cells, such as a text-mode frame buffer.
///
/// Callers keep `x < width()` and `y < height()`; implementations may panic
/// otherwise.
pub trait TextGrid {
    /// Number of columns.
    fn width(&self) -> usize;
    /// Number of rows.
    fn height(&self) -> usize;
    /// Stores a cell at column `x`, row `y`.
    fn write_cell(&mut self, x: usize, y: usize, cell: Cell);
    /// Loads the cell at column `x`, row `y`.
    fn read_cell(&self, x: usize, y: usize) -> Cell;
}

/// Receiver for hardware cursor position updates.
pub trait CursorSync {
    /// Reports the cursor as a linear cell offset (`y * width + x`).
    fn sync(&mut self, offset: u16);
}

/// Single-byte writes to I/O ports.
pub trait PortWriter {
    /// Writes `value` to `port`.
    fn write_byte(&mut self, port: u16, value: u8);
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes one byte, interpreting control characters.
    fn put_char(&mut self, byte: u8);

    /// Writes bytes one at a time.
    fn put_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Writes a string to the console.
    fn write_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
    }

    /// Writes formatted text; lets `write!` target a console directly.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        struct Adapter<'a, C: ?Sized>(&'a mut C);

        impl<C: Console + ?Sized> fmt::Write for Adapter<'_, C> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.put_bytes(s.as_bytes());
                Ok(())
            }
        }

        // The adapter never reports an error, so neither can formatting.
        let _ = fmt::write(&mut Adapter(self), args);
    }

    /// Clears the console screen.
    fn clear(&mut self);

    /// Sets the attribute used for subsequently written cells.
    fn set_color(&mut self, attribute: Attribute);

    /// Returns the current attribute.
    fn color(&self) -> Attribute;
}

/// Trait for the processor the console runs on.
pub trait Processor {
    /// Suspends until the next interrupt.
    fn wait_for_event(&mut self);
    /// Returns the current stack pointer.
    fn stack_pointer(&self) -> usize;
    /// Resets the machine.
    fn restart(&mut self) -> !;
}
