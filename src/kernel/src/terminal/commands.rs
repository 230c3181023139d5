//! Built-in shell commands.
//!
//! Matching is exact and case-sensitive. Only leading spaces are stripped;
//! trailing spaces make a command unknown.

use scutoid_common::color::{ABOUT_ATTRIBUTE, DEFAULT_ATTRIBUTE};
use scutoid_common::{Attribute, Color};
use scutoid_hal::{Console, Processor};

/// Addresses reported by the `mem` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Kernel entry point.
    pub kernel: usize,
    /// Text frame buffer.
    pub frame_buffer: usize,
    /// Keyboard scancode ring.
    pub keyboard_ring: usize,
}

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Display help information.
    Help,
    /// Show system identification.
    About,
    /// Show memory layout.
    Mem,
    /// Clear the screen.
    Clear,
    /// Print every color by name, in that color.
    Colors,
    /// Echo text.
    Echo {
        /// Everything after `echo `, untouched.
        text: &'a [u8],
    },
    /// Restart the machine.
    Reboot,
    /// Unknown command, with the line as typed minus leading spaces.
    Unknown(&'a [u8]),
}

impl<'a> Command<'a> {
    /// Parse a command line.
    ///
    /// Returns `None` for a line that is empty or all spaces.
    pub fn parse(line: &'a [u8]) -> Option<Command<'a>> {
        let start = line.iter().position(|&b| b != b' ').unwrap_or(line.len());
        let line = &line[start..];
        if line.is_empty() {
            return None;
        }

        let command = match line {
            b"help" => Command::Help,
            b"about" => Command::About,
            b"mem" => Command::Mem,
            b"clear" => Command::Clear,
            b"colors" => Command::Colors,
            _ if line.starts_with(b"echo ") => Command::Echo { text: &line[5..] },
            b"reboot" => Command::Reboot,
            _ => Command::Unknown(line),
        };
        Some(command)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Mem => "mem",
            Command::Clear => "clear",
            Command::Colors => "colors",
            Command::Echo { .. } => "echo",
            Command::Reboot => "reboot",
            Command::Unknown(_) => "unknown",
        }
    }

    /// Execute a command.
    pub fn execute<T, P>(self, console: &mut T, cpu: &mut P, layout: &MemoryLayout)
    where
        T: Console + ?Sized,
        P: Processor + ?Sized,
    {
        log::debug!("shell: {}", self.name());
        match self {
            Command::Help => cmd_help(console),
            Command::About => cmd_about(console),
            Command::Mem => cmd_mem(console, cpu.stack_pointer(), layout),
            Command::Clear => console.clear(),
            Command::Colors => cmd_colors(console),
            Command::Echo { text } => {
                console.put_bytes(text);
                console.put_char(b'\n');
            }
            Command::Reboot => {
                log::warn!("restart requested from shell");
                cpu.restart()
            }
            Command::Unknown(text) => {
                log::warn!("shell: unknown command ({} bytes)", text.len());
                console.write_str("? ");
                console.put_bytes(text);
                console.put_char(b'\n');
            }
        }
    }
}

/// Display help information.
fn cmd_help<T: Console + ?Sized>(console: &mut T) {
    console.write_str("commands:\n");
    console.write_str("  help      show this\n");
    console.write_str("  about     system info\n");
    console.write_str("  mem       memory layout\n");
    console.write_str("  clear     clear screen\n");
    console.write_str("  colors    color test\n");
    console.write_str("  echo ...  print text\n");
    console.write_str("  reboot    restart\n");
}

/// Show system identification.
fn cmd_about<T: Console + ?Sized>(console: &mut T) {
    console.set_color(ABOUT_ATTRIBUTE);
    console.write_str(crate::boot::VERSION);
    console.put_char(b'\n');
    console.set_color(DEFAULT_ATTRIBUTE);
    console.write_str("x86 kernel, hand-rolled from scratch\n");
    console.write_str("bootloader -> protected mode -> this shell\n");
}

fn cmd_mem<T: Console + ?Sized>(console: &mut T, stack: usize, layout: &MemoryLayout) {
    writeln!(console, "stack:    {:#010X}", stack);
    writeln!(console, "kernel:   {:#010X}", layout.kernel);
    writeln!(console, "vga:      {:#010X}", layout.frame_buffer);
    writeln!(console, "kb buf:   {:#010X}", layout.keyboard_ring);
}

/// Print each color's name in that color, then go back to the default.
fn cmd_colors<T: Console + ?Sized>(console: &mut T) {
    for color in Color::ALL {
        console.set_color(Attribute::from(color));
        console.write_str("  ");
        console.write_str(color.name());
        console.put_char(b'\n');
    }
    console.set_color(DEFAULT_ATTRIBUTE);
}
