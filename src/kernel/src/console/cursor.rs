//! Hardware text cursor on the VGA CRT controller.

use scutoid_hal::{CursorSync, PortWriter};

/// CRT controller index register.
pub const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRT controller data register.
pub const CRTC_DATA_PORT: u16 = 0x3D5;

/// Cursor location, high byte.
const CURSOR_LOCATION_HIGH: u8 = 0x0E;

/// Cursor location, low byte.
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// Moves the blinking hardware cursor through the CRTC registers.
pub struct VgaCursor<P> {
    ports: P,
}

impl<P: PortWriter> VgaCursor<P> {
    /// Creates a cursor driver writing through `ports`.
    pub fn new(ports: P) -> Self {
        VgaCursor { ports }
    }

    /// The port writer.
    pub fn ports(&self) -> &P {
        &self.ports
    }
}

impl<P: PortWriter> CursorSync for VgaCursor<P> {
    fn sync(&mut self, offset: u16) {
        let [low, high] = offset.to_le_bytes();
        self.ports.write_byte(CRTC_INDEX_PORT, CURSOR_LOCATION_LOW);
        self.ports.write_byte(CRTC_DATA_PORT, low);
        self.ports.write_byte(CRTC_INDEX_PORT, CURSOR_LOCATION_HIGH);
        self.ports.write_byte(CRTC_DATA_PORT, high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::PortLog;

    #[test]
    fn test_sync_writes_low_then_high() {
        let mut cursor = VgaCursor::new(PortLog::new());
        cursor.sync(24 * 80 + 79);

        assert_eq!(
            cursor.ports().writes(),
            &[
                (CRTC_INDEX_PORT, 0x0F),
                (CRTC_DATA_PORT, 0xCF),
                (CRTC_INDEX_PORT, 0x0E),
                (CRTC_DATA_PORT, 0x07),
            ]
        );
    }
}
