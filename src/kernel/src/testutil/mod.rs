//! Test infrastructure for ScutoidOS.
//!
//! Allocation-free stand-ins for the hardware behind the HAL traits, so
//! the console, shell and driver loop can be exercised on the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use scutoid_kernel::console::TextConsole;
//! use scutoid_kernel::testutil::{CursorLog, MemoryGrid};
//!
//! let console = TextConsole::new(MemoryGrid::<80, 25>::new(), CursorLog::new())?;
//! ```

use scutoid_common::color::DEFAULT_ATTRIBUTE;
use scutoid_common::{Attribute, Cell};
use scutoid_hal::{Console, CursorSync, PortWriter, Processor, TextGrid};

/// A `W`×`H` grid of cells held in memory.
pub struct MemoryGrid<const W: usize, const H: usize> {
    cells: [[Cell; W]; H],
}

impl<const W: usize, const H: usize> MemoryGrid<W, H> {
    /// Creates a grid of default-colored blanks.
    pub fn new() -> Self {
        MemoryGrid {
            cells: [[Cell::blank(DEFAULT_ATTRIBUTE); W]; H],
        }
    }

    /// Glyph bytes of row `y`.
    pub fn row_glyphs(&self, y: usize) -> [u8; W] {
        let mut glyphs = [0; W];
        for (glyph, cell) in glyphs.iter_mut().zip(self.cells[y].iter()) {
            *glyph = cell.glyph;
        }
        glyphs
    }
}

impl<const W: usize, const H: usize> Default for MemoryGrid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> TextGrid for MemoryGrid<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn write_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    fn read_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }
}

/// Remembers cursor syncs.
#[derive(Debug, Default)]
pub struct CursorLog {
    count: usize,
    last: Option<u16>,
}

impl CursorLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of syncs seen.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Most recent offset.
    pub fn last(&self) -> Option<u16> {
        self.last
    }
}

impl CursorSync for CursorLog {
    fn sync(&mut self, offset: u16) {
        self.count += 1;
        self.last = Some(offset);
    }
}

/// Maximum number of port writes a [`PortLog`] keeps.
const PORT_LOG_CAPACITY: usize = 64;

/// Records port writes in order. Writes past the capacity are dropped.
pub struct PortLog {
    writes: [(u16, u8); PORT_LOG_CAPACITY],
    len: usize,
}

impl PortLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        PortLog {
            writes: [(0, 0); PORT_LOG_CAPACITY],
            len: 0,
        }
    }

    /// Recorded `(port, value)` pairs.
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes[..self.len]
    }
}

impl Default for PortLog {
    fn default() -> Self {
        Self::new()
    }
}

impl PortWriter for PortLog {
    fn write_byte(&mut self, port: u16, value: u8) {
        if self.len < PORT_LOG_CAPACITY {
            self.writes[self.len] = (port, value);
            self.len += 1;
        }
    }
}

/// A console that records every byte written along with its color.
///
/// Control bytes are recorded, not interpreted. Output past `N` bytes is
/// dropped.
pub struct Transcript<const N: usize> {
    bytes: [u8; N],
    colors: [Attribute; N],
    len: usize,
    color: Attribute,
    clears: usize,
}

impl<const N: usize> Transcript<N> {
    /// Creates an empty transcript in the default color.
    pub fn new() -> Self {
        Transcript {
            bytes: [0; N],
            colors: [DEFAULT_ATTRIBUTE; N],
            len: 0,
            color: DEFAULT_ATTRIBUTE,
            clears: 0,
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Output as text; empty if it is not UTF-8.
    pub fn text(&self) -> &str {
        core::str::from_utf8(self.output()).unwrap_or("")
    }

    /// Color the byte at `index` was written in.
    pub fn color_at(&self, index: usize) -> Option<Attribute> {
        self.colors[..self.len].get(index).copied()
    }

    /// Number of `clear` calls.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Forgets recorded output, keeping the current color.
    pub fn reset(&mut self) {
        self.len = 0;
        self.clears = 0;
    }
}

impl<const N: usize> Default for Transcript<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Console for Transcript<N> {
    fn put_char(&mut self, byte: u8) {
        if self.len < N {
            self.bytes[self.len] = byte;
            self.colors[self.len] = self.color;
            self.len += 1;
        }
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn set_color(&mut self, attribute: Attribute) {
        self.color = attribute;
    }

    fn color(&self) -> Attribute {
        self.color
    }
}

/// A processor that never sleeps.
///
/// Counts waits, reports a fixed stack pointer and panics on restart.
#[derive(Debug)]
pub struct ScriptedCpu {
    waits: usize,
    stack_pointer: usize,
}

impl ScriptedCpu {
    /// Creates a processor reporting `stack_pointer`.
    pub fn new(stack_pointer: usize) -> Self {
        ScriptedCpu {
            waits: 0,
            stack_pointer,
        }
    }

    /// Number of `wait_for_event` calls.
    pub fn waits(&self) -> usize {
        self.waits
    }
}

impl Processor for ScriptedCpu {
    fn wait_for_event(&mut self) {
        self.waits += 1;
    }

    fn stack_pointer(&self) -> usize {
        self.stack_pointer
    }

    fn restart(&mut self) -> ! {
        panic!("restart requested");
    }
}
