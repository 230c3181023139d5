//! ScutoidOS Kernel
//!
//! A polling text console with a line-oriented command shell.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `keyboard`: scancode ring shared with the keyboard interrupt, and the
//!   scancode translator
//! - `console`: cursor, color and scrolling over a text grid
//! - `terminal`: line editor and built-in commands
//! - `driver`: the poll loop tying them together
//! - `arch`: Platform-specific code (VGA, serial, interrupts)
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. Raw memory and port access is confined to
//! `arch` and to the documented `unsafe` constructors of the keyboard ring.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod console;
pub mod driver;
pub mod keyboard;
pub mod terminal;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up logging and interrupts.
pub fn init() {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        arch::x86_64::serial::init_logger(log::LevelFilter::Debug);
        arch::x86_64::interrupts::init_idt();
    }
}
