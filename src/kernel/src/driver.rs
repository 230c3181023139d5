//! The top-level poll loop.
//!
//! Each pass takes at most one scancode off the keyboard ring, hands any
//! character it produces to the shell, then sleeps until the next
//! interrupt. The processor is suspended after every pass, busy or not.

use crate::keyboard::{self, KeyboardChannel};
use crate::terminal::CommandShell;
use scutoid_common::Scancode;
use scutoid_hal::{Console, Processor};

/// What a single poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The ring was empty.
    Idle,
    /// A key-release code was consumed and ignored.
    Released(u8),
    /// A make code without a character was consumed and ignored.
    Untranslated(u8),
    /// A character was fed to the shell.
    Fed(u8),
}

/// Owns the keyboard channel, console, shell and processor for the loop.
pub struct Driver<'a, T, P> {
    channel: KeyboardChannel<'a>,
    console: T,
    shell: CommandShell,
    cpu: P,
}

impl<'a, T: Console, P: Processor> Driver<'a, T, P> {
    /// Assembles a driver. Nothing is printed until [`start`](Self::start).
    pub fn new(channel: KeyboardChannel<'a>, console: T, shell: CommandShell, cpu: P) -> Self {
        Driver {
            channel,
            console,
            shell,
            cpu,
        }
    }

    /// Shows the first prompt.
    pub fn start(&mut self) {
        self.shell.start_line(&mut self.console);
    }

    /// Consumes at most one scancode without sleeping.
    pub fn poll(&mut self) -> Step {
        if !self.channel.has_input() {
            return Step::Idle;
        }
        let raw = self.channel.read_one();
        if Scancode::new(raw).is_release() {
            return Step::Released(raw);
        }
        match keyboard::translate(raw) {
            Some(byte) => {
                self.shell.feed_char(byte, &mut self.console, &mut self.cpu);
                Step::Fed(byte)
            }
            None => {
                log::trace!("driver: no character for scancode {:#04x}", raw);
                Step::Untranslated(raw)
            }
        }
    }

    /// One loop pass: poll, then wait for the next interrupt.
    pub fn step(&mut self) -> Step {
        let step = self.poll();
        self.cpu.wait_for_event();
        step
    }

    /// Prompts, then polls forever.
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// The console.
    pub fn console(&self) -> &T {
        &self.console
    }

    /// The shell.
    pub fn shell(&self) -> &CommandShell {
        &self.shell
    }

    /// The processor.
    pub fn cpu(&self) -> &P {
        &self.cpu
    }
}
