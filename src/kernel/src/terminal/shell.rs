//! Command-line shell with input handling.
//!
//! Provides a single editable line with backspace and nothing else.
//! There is no cursor movement within the line and no history.

use super::commands::{Command, MemoryLayout};
use scutoid_common::color::{DEFAULT_ATTRIBUTE, PROMPT_ATTRIBUTE};
use scutoid_hal::{Console, Processor};

/// Size of the line buffer. One slot stays free, so a line holds at most
/// `LINE_CAPACITY - 1` bytes.
pub const LINE_CAPACITY: usize = 256;

/// Host name shown in the prompt.
const PROMPT_NAME: &str = "scutoidos";

/// Line editor and command dispatcher.
pub struct CommandShell {
    /// Current input buffer.
    line: [u8; LINE_CAPACITY],
    /// Bytes used in `line`.
    len: usize,
    layout: MemoryLayout,
}

impl CommandShell {
    /// Create a new shell with an empty line.
    pub fn new(layout: MemoryLayout) -> Self {
        CommandShell {
            line: [0; LINE_CAPACITY],
            len: 0,
            layout,
        }
    }

    /// Display the shell prompt and start an empty line.
    pub fn start_line<T: Console + ?Sized>(&mut self, console: &mut T) {
        let saved = console.color();
        console.set_color(PROMPT_ATTRIBUTE);
        console.write_str(PROMPT_NAME);
        console.set_color(DEFAULT_ATTRIBUTE);
        console.write_str("> ");
        console.set_color(saved);
        self.len = 0;
    }

    /// Handle one translated keystroke.
    ///
    /// Newline runs the line, backspace removes the last byte, anything else
    /// is appended and echoed. Input arriving while the line is full is
    /// dropped without echo.
    pub fn feed_char<T, P>(&mut self, byte: u8, console: &mut T, cpu: &mut P)
    where
        T: Console + ?Sized,
        P: Processor + ?Sized,
    {
        match byte {
            b'\n' => {
                console.put_char(b'\n');
                self.dispatch(&self.line[..self.len], console, cpu);
                self.start_line(console);
            }
            b'\x08' => {
                if self.len > 0 {
                    self.len -= 1;
                    console.put_char(b'\x08');
                }
            }
            byte => {
                if self.len < LINE_CAPACITY - 1 {
                    self.line[self.len] = byte;
                    self.len += 1;
                    console.put_char(byte);
                }
            }
        }
    }

    /// Run a completed line.
    ///
    /// Blank lines do nothing; everything else goes to a built-in command or
    /// to the unknown-command reply.
    pub fn dispatch<T, P>(&self, text: &[u8], console: &mut T, cpu: &mut P)
    where
        T: Console + ?Sized,
        P: Processor + ?Sized,
    {
        if let Some(command) = Command::parse(text) {
            command.execute(console, cpu, &self.layout);
        }
    }

    /// Get the current input line.
    pub fn line(&self) -> &[u8] {
        &self.line[..self.len]
    }

    /// Number of bytes in the current line.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the current line is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
