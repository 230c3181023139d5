//! ScutoidOS Kernel Entry Point
//!
//! Boots straight into the command shell on the VGA text console. Only
//! meaningful on the bare-metal x86_64 target; host builds get a stub.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use scutoid_common::color::DEFAULT_ATTRIBUTE;
    use scutoid_common::{Attribute, Color};
    use scutoid_hal::{Console, Processor};
    use scutoid_kernel::arch::x86_64::{self, interrupts::KEYBOARD_RING, VgaFrame, X86Cpu, X86Ports};
    use scutoid_kernel::console::{TextConsole, VgaCursor};
    use scutoid_kernel::driver::Driver;
    use scutoid_kernel::keyboard::KeyboardChannel;
    use scutoid_kernel::terminal::{CommandShell, MemoryLayout};
    use scutoid_kernel::{boot, serial_println};

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        scutoid_kernel::init();
        log::info!("serial log ready, interrupts enabled");

        scutoid_kernel::tests::run_all();

        // SAFETY: this is the only frame-buffer view outside the panic path.
        let frame = unsafe { VgaFrame::new() };
        let layout = MemoryLayout {
            kernel: kernel_main as usize,
            frame_buffer: frame.addr(),
            keyboard_ring: KEYBOARD_RING.addr(),
        };
        let mut console = TextConsole::new(frame, VgaCursor::new(X86Ports))
            .expect("VGA geometry fits the cursor register");
        let cpu = X86Cpu;

        boot::print_banner(&mut console, &layout, cpu.stack_pointer());
        log::info!("boot complete");

        // SAFETY: the driver below is the only consumer of the ring.
        let channel = unsafe { KeyboardChannel::attach(&KEYBOARD_RING) };
        Driver::new(channel, console, CommandShell::new(layout), cpu).run()
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // SAFETY: the driver's console is never used again after a panic.
        let frame = unsafe { VgaFrame::new() };
        if let Ok(mut console) = TextConsole::new(frame, VgaCursor::new(X86Ports)) {
            console.set_color(Attribute::new(Color::LightRed, Color::Black));
            console.write_str("\n\n!!! KERNEL PANIC !!!\n");
            console.set_color(DEFAULT_ATTRIBUTE);
            writeln!(console, "{}", info);
        }

        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("scutoid-kernel runs on bare-metal x86_64; build it with `cargo bootimage`");
}
