//! x86_64 architecture support.
//!
//! Provides the VGA frame buffer, serial logging, interrupt setup and the
//! processor primitives the driver loop needs.

pub mod interrupts;
pub mod pic;
pub mod serial;
pub mod vga;

pub use vga::VgaFrame;

use scutoid_hal::{PortWriter, Processor};
use x86_64::instructions::port::Port;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}

/// Port I/O through `in`/`out` instructions.
pub struct X86Ports;

impl PortWriter for X86Ports {
    fn write_byte(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        // SAFETY: only the CRT controller registers are written through
        // this type, and writing them has no effect beyond the display.
        unsafe { port.write(value) };
    }
}

/// The boot processor.
pub struct X86Cpu;

impl Processor for X86Cpu {
    fn wait_for_event(&mut self) {
        hlt();
    }

    fn stack_pointer(&self) -> usize {
        let rsp: usize;
        // SAFETY: reads a register, touches no memory.
        unsafe {
            core::arch::asm!("mov {}, rsp", out(reg) rsp, options(nomem, nostack, preserves_flags));
        }
        rsp
    }

    fn restart(&mut self) -> ! {
        use x86_64::instructions::tables::lidt;
        use x86_64::structures::DescriptorTablePointer;
        use x86_64::VirtAddr;

        let empty = DescriptorTablePointer {
            limit: 0,
            base: VirtAddr::new(0),
        };
        // SAFETY: deliberately loads an empty IDT so that the breakpoint
        // below escalates to a triple fault and the CPU resets.
        unsafe { lidt(&empty) };
        x86_64::instructions::interrupts::int3();
        halt_loop()
    }
}
