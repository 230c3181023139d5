//! Boot screen.

use crate::terminal::MemoryLayout;
use scutoid_common::color::{BANNER_ATTRIBUTE, DEFAULT_ATTRIBUTE};
use scutoid_hal::Console;

/// Version string shown at boot and by `about`.
pub const VERSION: &str = "ScutoidOS v0.1";

/// Clear the screen and print the ScutoidOS boot banner.
pub fn print_banner<T: Console + ?Sized>(console: &mut T, layout: &MemoryLayout, stack: usize) {
    console.clear();

    console.set_color(BANNER_ATTRIBUTE);
    console.write_str(VERSION);
    console.put_char(b'\n');
    console.set_color(DEFAULT_ATTRIBUTE);

    writeln!(console, "kernel @ {:#010X}", layout.kernel);
    writeln!(console, "stack  @ {:#010X}", stack);
    console.write_str("type 'help' for commands\n\n");
}
