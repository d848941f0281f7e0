//! Drive RAM.
//!
//! Working memory at `$0000`. The first two pages are the zero page and the
//! hardware stack; their accessors take a `u8` offset and wrap inside their
//! page, so they can never reach a neighbouring page.

/// Base address of the zero page.
pub const ZERO_PAGE: u16 = 0x0000;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Zero-filled RAM of `SIZE` bytes.
///
/// `SIZE` is a build parameter (the drive shipped with 1KB and 2KB variants).
/// It must cover at least the zero page and the stack page.
///
/// # Examples
///
/// ```rust
/// use drive6502::Ram;
///
/// let mut ram = Ram::<2048>::new();
///
/// ram.write_stack(0xFF, 0xAA);
/// assert_eq!(ram.get(0x01FF), Some(0xAA));
/// assert_eq!(ram.get(0x0800), None);
///
/// // 16-bit zero-page reads wrap from $FF back to $00
/// ram.write_zero_page(0xFF, 0x34);
/// ram.write_zero_page(0x00, 0x12);
/// assert_eq!(ram.read16_zero_page(0xFF), 0x1234);
/// ```
#[derive(Clone)]
pub struct Ram<const SIZE: usize> {
    data: Box<[u8; SIZE]>,
}

impl<const SIZE: usize> Ram<SIZE> {
    const SIZE_OK: () = assert!(
        SIZE >= 0x0200 && SIZE <= 0xC000,
        "RAM must cover the zero page and stack page without reaching $C000"
    );

    /// Creates zero-filled RAM.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_OK;
        Self {
            data: Box::new([0; SIZE]),
        }
    }

    /// Number of bytes of RAM.
    pub const fn size(&self) -> usize {
        SIZE
    }

    /// Zero-fills the whole array.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Returns the byte at `address`, or `None` past the end of RAM.
    #[inline]
    pub fn get(&self, address: u16) -> Option<u8> {
        self.data.get(address as usize).copied()
    }

    /// Unchecked read for the memory router, which bounds-checks first.
    /// Callers outside the crate use [`Ram::get`].
    #[inline]
    pub(crate) fn read(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    /// Writes a byte if `address` is inside RAM; returns whether it landed.
    #[inline]
    pub fn write(&mut self, address: u16, value: u8) -> bool {
        match self.data.get_mut(address as usize) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Reads from the zero page.
    #[inline]
    pub fn read_zero_page(&self, offset: u8) -> u8 {
        self.data[offset as usize]
    }

    /// Little-endian pointer read from the zero page; `$FF` wraps to `$00`.
    #[inline]
    pub fn read16_zero_page(&self, offset: u8) -> u16 {
        u16::from_le_bytes([
            self.read_zero_page(offset),
            self.read_zero_page(offset.wrapping_add(1)),
        ])
    }

    /// Writes to the zero page.
    #[inline]
    pub fn write_zero_page(&mut self, offset: u8, value: u8) {
        self.data[offset as usize] = value;
    }

    /// Reads from the stack page at `$0100 + offset`.
    #[inline]
    pub fn read_stack(&self, offset: u8) -> u8 {
        self.data[STACK_PAGE as usize + offset as usize]
    }

    /// Little-endian read from the stack page; `$01FF` wraps to `$0100`.
    #[inline]
    pub fn read16_stack(&self, offset: u8) -> u16 {
        u16::from_le_bytes([self.read_stack(offset), self.read_stack(offset.wrapping_add(1))])
    }

    /// Writes to the stack page at `$0100 + offset`.
    #[inline]
    pub fn write_stack(&mut self, offset: u8, value: u8) {
        self.data[STACK_PAGE as usize + offset as usize] = value;
    }

    /// Copies `bytes` into RAM starting at `address`, dropping anything that
    /// would land past the end.
    pub fn load_bytes(&mut self, address: u16, bytes: &[u8]) {
        let start = (address as usize).min(SIZE);
        let end = (start + bytes.len()).min(SIZE);
        self.data[start..end].copy_from_slice(&bytes[..end - start]);
    }
}

impl<const SIZE: usize> std::fmt::Debug for Ram<SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram").field("size", &SIZE).finish()
    }
}

impl<const SIZE: usize> Default for Ram<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
