//! Value types shared by the ScutoidOS crates.
//!
//! Everything here is plain data: color attributes, frame-buffer cells,
//! scancodes and the error type used by construction and validation APIs.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod cell;
pub mod color;
pub mod error;
pub mod scancode;

pub use cell::Cell;
pub use color::{Attribute, Color};
pub use error::ConsoleError;
pub use scancode::{Scancode, ScancodeFlags};
