//! Boot-time self checks.
//!
//! Run on the target before the shell starts, against scratch state, so a
//! broken build fails loudly on the serial log instead of at the keyboard.

use crate::console::TextConsole;
use crate::keyboard::{self, KeyboardRing};
use crate::testutil::{CursorLog, MemoryGrid};
use scutoid_common::color::DEFAULT_ATTRIBUTE;
use scutoid_common::Cell;

/// Runs all self checks.
pub fn run_all() {
    log::info!("running self checks");

    test_translator();
    test_ring();
    test_console();

    log::info!("all self checks passed");
}

fn test_translator() {
    log::debug!("test_translator...");
    assert_eq!(keyboard::translate(0x1E), Some(b'a'));
    assert_eq!(keyboard::translate(0x1C), Some(b'\n'));
    assert_eq!(keyboard::translate(0x2A), None);
    assert_eq!(keyboard::translate(0x9E), None);
}

fn test_ring() {
    log::debug!("test_ring...");
    let mut ring = KeyboardRing::new();
    let (mut producer, mut channel) = ring.split();
    for byte in 0..200u8 {
        producer.push(byte);
    }
    for byte in 0..200u8 {
        assert!(channel.has_input());
        assert_eq!(channel.read_one(), byte);
    }
    assert!(!channel.has_input());
}

fn test_console() {
    log::debug!("test_console...");
    let console = TextConsole::new(MemoryGrid::<8, 2>::new(), CursorLog::new());
    let Ok(mut console) = console else {
        panic!("self check console rejected");
    };
    console.clear();
    console.put_string(b"12345678x");
    assert_eq!(console.cursor(), (1, 1));
    console.put_string(b"\n");
    assert_eq!(console.cursor(), (0, 1));
    assert_eq!(console.cell_at(0, 0), Ok(Cell::new(b'x', DEFAULT_ATTRIBUTE)));
}

#[cfg(test)]
mod host {
    #[test]
    fn test_self_checks_pass() {
        super::run_all();
    }
}
