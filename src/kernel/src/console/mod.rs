//! Text console: cursor, color and scrolling over a cell grid.
//!
//! [`TextConsole`] is the only writer of the frame buffer and the cursor.
//! It works on any [`TextGrid`], so the same code drives the VGA buffer at
//! boot and an in-memory grid under test.

pub mod cursor;

pub use cursor::VgaCursor;

use scutoid_common::color::DEFAULT_ATTRIBUTE;
use scutoid_common::{Attribute, Cell, ConsoleError};
use scutoid_hal::{Console, CursorSync, TextGrid};

/// Highest cell count the 16-bit cursor register can address.
const MAX_CELLS: usize = u16::MAX as usize + 1;

/// Cursor and color state over a cell grid.
pub struct TextConsole<G, C> {
    /// Current column position (0 to width-1).
    x: usize,
    /// Current row position (0 to height-1).
    y: usize,
    /// Attribute for newly written cells.
    color: Attribute,
    grid: G,
    cursor: C,
}

impl<G: TextGrid, C: CursorSync> TextConsole<G, C> {
    /// Creates a console over `grid`, reporting its cursor to `cursor`.
    ///
    /// The screen contents are left as they are; call [`clear`](Self::clear)
    /// to start from a blank screen.
    pub fn new(grid: G, cursor: C) -> Result<Self, ConsoleError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 || width.saturating_mul(height) > MAX_CELLS {
            return Err(ConsoleError::InvalidGeometry { width, height });
        }
        Ok(TextConsole {
            x: 0,
            y: 0,
            color: DEFAULT_ATTRIBUTE,
            grid,
            cursor,
        })
    }

    /// Fills the screen with blanks in the current color and homes the cursor.
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.color);
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                self.grid.write_cell(x, y, blank);
            }
        }
        self.x = 0;
        self.y = 0;
        self.sync_cursor();
    }

    /// Sets the attribute for subsequently written cells.
    pub fn set_color(&mut self, color: Attribute) {
        self.color = color;
    }

    /// Current attribute.
    pub fn color(&self) -> Attribute {
        self.color
    }

    /// Cursor position as `(x, y)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Writes one byte at the cursor.
    ///
    /// Newline, carriage return, tab and backspace move the cursor; every
    /// other byte is stored verbatim. The cursor wraps at the right edge and
    /// the screen scrolls once the cursor runs off the bottom.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.x = 0;
                self.y += 1;
            }
            b'\r' => self.x = 0,
            b'\t' => self.x = (self.x + 4) & !3,
            b'\x08' => {
                if self.x > 0 {
                    self.x -= 1;
                    // Erases with the current color, not the cell's own.
                    self.grid.write_cell(self.x, self.y, Cell::blank(self.color));
                }
            }
            byte => {
                self.grid.write_cell(self.x, self.y, Cell::new(byte, self.color));
                self.x += 1;
            }
        }

        if self.x >= self.grid.width() {
            self.x = 0;
            self.y += 1;
        }
        if self.y >= self.grid.height() {
            self.scroll();
        }
        self.sync_cursor();
    }

    /// Writes each byte of `s` in turn.
    pub fn put_string(&mut self, s: &[u8]) {
        for &byte in s {
            self.put_char(byte);
        }
    }

    /// Moves every row up by one, blanks the last row and parks the cursor
    /// on it.
    pub fn scroll(&mut self) {
        let (width, height) = (self.grid.width(), self.grid.height());
        for y in 1..height {
            for x in 0..width {
                let cell = self.grid.read_cell(x, y);
                self.grid.write_cell(x, y - 1, cell);
            }
        }
        let blank = Cell::blank(self.color);
        for x in 0..width {
            self.grid.write_cell(x, height - 1, blank);
        }
        self.y = height - 1;
        self.sync_cursor();
    }

    /// Reads back the cell at `(x, y)`.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, ConsoleError> {
        if x >= self.grid.width() || y >= self.grid.height() {
            return Err(ConsoleError::OutOfBounds { x, y });
        }
        Ok(self.grid.read_cell(x, y))
    }

    /// The underlying grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// The cursor sink.
    pub fn cursor_sync(&self) -> &C {
        &self.cursor
    }

    fn sync_cursor(&mut self) {
        // Fits: width * height <= MAX_CELLS was checked in `new`.
        let offset = self.y * self.grid.width() + self.x;
        self.cursor.sync(offset as u16);
    }
}

impl<G: TextGrid, C: CursorSync> Console for TextConsole<G, C> {
    fn put_char(&mut self, byte: u8) {
        TextConsole::put_char(self, byte);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        self.put_string(bytes);
    }

    fn clear(&mut self) {
        TextConsole::clear(self);
    }

    fn set_color(&mut self, attribute: Attribute) {
        TextConsole::set_color(self, attribute);
    }

    fn color(&self) -> Attribute {
        TextConsole::color(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{CursorLog, MemoryGrid};
    use scutoid_common::Color;

    type SmallConsole = TextConsole<MemoryGrid<8, 4>, CursorLog>;

    fn console() -> SmallConsole {
        let mut console =
            TextConsole::new(MemoryGrid::new(), CursorLog::new()).expect("valid geometry");
        console.clear();
        console
    }

    fn row(console: &SmallConsole, y: usize) -> [u8; 8] {
        console.grid().row_glyphs(y)
    }

    #[test]
    fn test_clear_fills_with_current_color() {
        let mut console = console();
        console.put_string(b"abc");
        let blue = Attribute::new(Color::White, Color::Blue);
        console.set_color(blue);
        console.clear();

        assert_eq!(console.cursor(), (0, 0));
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(console.cell_at(x, y), Ok(Cell::blank(blue)));
            }
        }
        assert_eq!(console.cursor_sync().last(), Some(0));
    }

    #[test]
    fn test_put_char_read_back() {
        let mut console = console();
        let colors = [
            Attribute::new(Color::Red, Color::Black),
            Attribute::new(Color::Yellow, Color::Blue),
        ];
        for (i, &color) in colors.iter().cycle().take(20).enumerate() {
            let (x, y) = console.cursor();
            console.set_color(color);
            let glyph = b'A' + i as u8;
            console.put_char(glyph);
            assert_eq!(console.cell_at(x, y), Ok(Cell::new(glyph, color)));
        }
    }

    #[test]
    fn test_set_color_does_not_repaint() {
        let mut console = console();
        console.put_char(b'x');
        console.set_color(Attribute::new(Color::Green, Color::Black));
        assert_eq!(console.cell_at(0, 0), Ok(Cell::new(b'x', DEFAULT_ATTRIBUTE)));
    }

    #[test]
    fn test_full_row_wraps_without_scroll() {
        let mut console = console();
        console.put_string(b"first\n");
        console.put_string(b"12345678");

        assert_eq!(console.cursor(), (0, 2));
        assert_eq!(&row(&console, 0)[..5], b"first");
        assert_eq!(&row(&console, 1), b"12345678");
    }

    #[test]
    fn test_last_cell_scrolls_once() {
        let mut console = console();
        let marked = Attribute::new(Color::LightRed, Color::Black);
        console.put_string(b"row0\nrow1\n");
        console.set_color(marked);
        console.put_string(b"row2\n");
        console.set_color(DEFAULT_ATTRIBUTE);
        console.put_string(b"row3...");
        assert_eq!(console.cursor(), (7, 3));

        console.put_char(b'!');

        assert_eq!(console.cursor(), (0, 3));
        assert_eq!(&row(&console, 0)[..4], b"row1");
        assert_eq!(&row(&console, 1)[..4], b"row2");
        assert_eq!(&row(&console, 2), b"row3...!");
        assert_eq!(&row(&console, 3), b"        ");
        // Whole cells move, so row2 keeps its color.
        assert_eq!(console.cell_at(0, 1), Ok(Cell::new(b'r', marked)));
    }

    #[test]
    fn test_newline_on_last_row_scrolls() {
        let mut console = console();
        console.put_string(b"a\nb\nc\nd");
        console.put_char(b'\n');
        assert_eq!(console.cursor(), (0, 3));
        assert_eq!(row(&console, 0)[0], b'b');
        assert_eq!(row(&console, 2)[0], b'd');
        assert_eq!(row(&console, 3)[0], b' ');
    }

    #[test]
    fn test_scroll_blanks_with_current_color() {
        let mut console = console();
        let green = Attribute::new(Color::Green, Color::Black);
        console.set_color(green);
        console.scroll();
        assert_eq!(console.cursor(), (0, 3));
        assert_eq!(console.cell_at(5, 3), Ok(Cell::blank(green)));
    }

    #[test]
    fn test_carriage_return() {
        let mut console = console();
        console.put_string(b"abc\rX");
        assert_eq!(&row(&console, 0)[..3], b"Xbc");
        assert_eq!(console.cursor(), (1, 0));
    }

    #[test]
    fn test_tab_aligns_to_four() {
        let mut console = console();
        console.put_char(b'\t');
        assert_eq!(console.cursor(), (4, 0));
        console.put_char(b'\t');
        // 8 is past the edge of an 8-wide grid: wrap.
        assert_eq!(console.cursor(), (0, 1));
        console.put_string(b"ab\t");
        assert_eq!(console.cursor(), (4, 1));
        assert_eq!(&row(&console, 1)[..4], b"ab  ");
    }

    #[test]
    fn test_backspace_erases_with_current_color() {
        let mut console = console();
        console.put_string(b"ab");
        let red = Attribute::new(Color::Red, Color::Black);
        console.set_color(red);
        console.put_char(b'\x08');

        assert_eq!(console.cursor(), (1, 0));
        assert_eq!(console.cell_at(1, 0), Ok(Cell::blank(red)));
        assert_eq!(console.cell_at(0, 0), Ok(Cell::new(b'a', DEFAULT_ATTRIBUTE)));
    }

    #[test]
    fn test_backspace_at_column_zero() {
        let mut console = console();
        console.put_string(b"ab\n");
        console.put_char(b'\x08');
        assert_eq!(console.cursor(), (0, 1));
        assert_eq!(&row(&console, 0)[..2], b"ab");
    }

    #[test]
    fn test_every_put_char_syncs_cursor() {
        let mut console = console();
        let before = console.cursor_sync().count();
        console.put_string(b"ab\ncd");
        assert_eq!(console.cursor_sync().count(), before + 5);
        assert_eq!(console.cursor_sync().last(), Some(8 + 2));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let console = console();
        assert_eq!(
            console.cell_at(8, 0),
            Err(ConsoleError::OutOfBounds { x: 8, y: 0 })
        );
        assert_eq!(
            console.cell_at(0, 4),
            Err(ConsoleError::OutOfBounds { x: 0, y: 4 })
        );
    }

    #[test]
    fn test_rejects_empty_grid() {
        let result = TextConsole::new(MemoryGrid::<0, 4>::new(), CursorLog::new());
        assert_eq!(
            result.err(),
            Some(ConsoleError::InvalidGeometry { width: 0, height: 4 })
        );
    }
}
