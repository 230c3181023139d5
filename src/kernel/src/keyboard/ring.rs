//! Single-producer/single-consumer scancode ring.
//!
//! Memory layout is `[write_index][read_index][buffer; 256]`, 258 bytes,
//! shared with the interrupt handler. Indices are 8 bits wide and wrap on
//! their own, so the unread count is `write_index - read_index` modulo 256.
//!
//! There is no overflow detection: a producer that gets a full cycle ahead
//! of the consumer overwrites unread slots and the unread count drops back
//! to zero.

use core::sync::atomic::{AtomicU8, Ordering};

/// Number of slots in the ring.
pub const RING_CAPACITY: usize = 256;

/// The shared ring buffer.
#[repr(C)]
pub struct KeyboardRing {
    /// Next slot the producer fills. Written only by the producer.
    write_index: AtomicU8,
    /// Next slot the consumer drains. Written only by the consumer.
    read_index: AtomicU8,
    slots: [AtomicU8; RING_CAPACITY],
}

const _: () = assert!(core::mem::size_of::<KeyboardRing>() == 2 + RING_CAPACITY);

impl KeyboardRing {
    /// Creates an empty ring with both indices at zero.
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const EMPTY: AtomicU8 = AtomicU8::new(0);
        KeyboardRing {
            write_index: AtomicU8::new(0),
            read_index: AtomicU8::new(0),
            slots: [EMPTY; RING_CAPACITY],
        }
    }

    /// Views the ring at a fixed address.
    ///
    /// # Safety
    ///
    /// `addr` must point to 258 bytes that stay valid for the rest of the
    /// program and are laid out as described in the module docs.
    pub unsafe fn from_addr(addr: usize) -> &'static KeyboardRing {
        // SAFETY: guaranteed by the caller. The ring has alignment 1.
        unsafe { &*(addr as *const KeyboardRing) }
    }

    /// Splits an exclusively borrowed ring into its two halves.
    ///
    /// The exclusive borrow guarantees no other handle exists for the
    /// lifetime of the pair.
    pub fn split(&mut self) -> (KeyboardProducer<'_>, KeyboardChannel<'_>) {
        let ring: &KeyboardRing = self;
        (KeyboardProducer { ring }, KeyboardChannel { ring })
    }

    /// Number of unread bytes, modulo 256.
    pub fn pending(&self) -> u8 {
        let write = self.write_index.load(Ordering::Acquire);
        let read = self.read_index.load(Ordering::Relaxed);
        write.wrapping_sub(read)
    }

    /// Address of the ring, as reported by the shell's `mem` command.
    pub fn addr(&self) -> usize {
        self as *const KeyboardRing as usize
    }
}

impl Default for KeyboardRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer half of the ring. Only this type advances `read_index`.
pub struct KeyboardChannel<'a> {
    ring: &'a KeyboardRing,
}

impl<'a> KeyboardChannel<'a> {
    /// Attaches a consumer to a ring whose producer runs elsewhere.
    ///
    /// # Safety
    ///
    /// At most one `KeyboardChannel` may exist for `ring` at a time.
    pub unsafe fn attach(ring: &'a KeyboardRing) -> Self {
        KeyboardChannel { ring }
    }

    /// Returns whether unread bytes are waiting.
    pub fn has_input(&self) -> bool {
        self.ring.write_index.load(Ordering::Acquire) != self.ring.read_index.load(Ordering::Relaxed)
    }

    /// Takes the byte at `read_index` and advances the index.
    ///
    /// Callers check [`has_input`](Self::has_input) first. On an empty ring
    /// this returns whatever the slot last held and still advances.
    pub fn read_one(&mut self) -> u8 {
        let index = self.ring.read_index.load(Ordering::Relaxed);
        let byte = self.ring.slots[usize::from(index)].load(Ordering::Relaxed);
        // Slot is read before the index is published back to the producer.
        self.ring
            .read_index
            .store(index.wrapping_add(1), Ordering::Release);
        byte
    }

    /// Number of unread bytes, modulo 256.
    pub fn pending(&self) -> u8 {
        self.ring.pending()
    }
}

/// Producer half of the ring. Only this type advances `write_index`.
pub struct KeyboardProducer<'a> {
    ring: &'a KeyboardRing,
}

impl<'a> KeyboardProducer<'a> {
    /// Attaches a producer to a ring whose consumer runs elsewhere.
    ///
    /// # Safety
    ///
    /// At most one `KeyboardProducer` may be pushing to `ring` at a time.
    pub unsafe fn attach(ring: &'a KeyboardRing) -> Self {
        KeyboardProducer { ring }
    }

    /// Stores a byte and publishes it to the consumer.
    ///
    /// Never checks for room; a full ring is overwritten.
    pub fn push(&mut self, byte: u8) {
        let index = self.ring.write_index.load(Ordering::Relaxed);
        self.ring.slots[usize::from(index)].store(byte, Ordering::Relaxed);
        self.ring
            .write_index
            .store(index.wrapping_add(1), Ordering::Release);
    }
}
