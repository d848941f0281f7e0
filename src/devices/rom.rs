//! Firmware store.
//!
//! Holds the drive's read-only DOS image. The image is loaded once, before the
//! CPU is built, and never mutated afterwards.

use log::debug;
use thiserror::Error;

/// Size of the firmware image in bytes (16KB).
pub const FIRMWARE_SIZE: usize = 0x4000;

/// Mask applied to any address before it indexes the image (lowest 14 bits).
const FIRMWARE_MASK: u16 = (FIRMWARE_SIZE - 1) as u16;

/// Error returned when a firmware image cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FirmwareError {
    /// The blob is not exactly one firmware image long.
    #[error("firmware image must be {expected} bytes, got {got}")]
    InvalidSize {
        /// Required image size
        expected: usize,
        /// Size of the rejected blob
        got: usize,
    },
}

/// Immutable 16KB firmware image.
///
/// Reads are addressed by `address & 0x3FFF`, so the image answers the same
/// way wherever it is placed in the 16-bit space. There is no write path.
///
/// # Examples
///
/// ```rust
/// use drive6502::Firmware;
///
/// let mut data = vec![0; 16384];
/// data[0x3FFC] = 0x00; // Low byte of reset vector
/// data[0x3FFD] = 0xC0; // High byte (PC = 0xC000)
///
/// let firmware = Firmware::from_bytes(&data).unwrap();
/// assert_eq!(firmware.read(0xFFFD), 0xC0);
/// assert_eq!(firmware.read(0x3FFD), 0xC0); // Same byte, masked
/// ```
#[derive(Clone)]
pub struct Firmware {
    data: Box<[u8; FIRMWARE_SIZE]>,
}

impl Firmware {
    /// Loads a firmware image from a raw blob.
    ///
    /// # Errors
    ///
    /// Returns [`FirmwareError::InvalidSize`] unless the blob is exactly
    /// 16384 bytes. A wrong-sized image is a setup error and is reported here
    /// rather than surfacing later as bad reads.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FirmwareError> {
        let data: Box<[u8; FIRMWARE_SIZE]> = bytes
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|_| FirmwareError::InvalidSize {
                expected: FIRMWARE_SIZE,
                got: bytes.len(),
            })?;

        let firmware = Self { data };
        debug!(
            "firmware loaded: reset=${:04X} irq=${:04X} nmi=${:04X}",
            firmware.read16(0xFFFC),
            firmware.read16(0xFFFE),
            firmware.read16(0xFFFA)
        );
        Ok(firmware)
    }

    /// Reads a byte; `address` is masked into the image's bounds.
    #[inline]
    pub fn read(&self, address: u16) -> u8 {
        self.data[(address & FIRMWARE_MASK) as usize]
    }

    /// Little-endian 16-bit read; the high byte wraps within the image.
    #[inline]
    pub fn read16(&self, address: u16) -> u16 {
        u16::from_le_bytes([self.read(address), self.read(address.wrapping_add(1))])
    }

    /// The raw image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }
}

impl std::fmt::Debug for Firmware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Firmware")
            .field("size", &FIRMWARE_SIZE)
            .field("reset_vector", &format_args!("${:04X}", self.read16(0xFFFC)))
            .finish()
    }
}
