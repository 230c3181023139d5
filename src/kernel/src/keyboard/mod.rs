//! Keyboard input: the shared scancode ring and the scancode translator.
//!
//! The keyboard interrupt handler is the producer and the driver loop is the
//! consumer. Each side gets its own handle type so that every index of the
//! ring has exactly one writer.

pub mod ring;
pub mod scancode;

pub use ring::{KeyboardChannel, KeyboardProducer, KeyboardRing, RING_CAPACITY};
pub use scancode::translate;
