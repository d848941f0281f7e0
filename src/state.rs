//! Processor state snapshots and the diagnostic trace line.
//!
//! The trace line is the core's only human-facing output:
//!
//! ```text
//! PC:C000 A:00 X:00 Y:00 S:FD P:24 nv-bdIzc
//! ```
//!
//! Flag letters are upper case when set, lower case when clear; bit 5 is
//! always shown as `-`.

use std::fmt::{self, Write};

use crate::StatusFlags;

/// Width of a formatted trace line in bytes. Every line is exactly this long.
pub const TRACE_LINE_WIDTH: usize = 41;

/// Flag letters from bit 7 down to bit 0; bit 5 has none.
const FLAG_LETTERS: [char; 8] = ['N', 'V', '-', 'B', 'D', 'I', 'Z', 'C'];

/// Copy of the processor registers at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuState {
    /// Program counter
    pub pc: u16,
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer
    pub s: u8,
    /// Status register (bit 5 reads as 1)
    pub p: u8,
}

impl CpuState {
    /// A, X, Y, S and P packed as `A:X:Y:S:P` (A in bits 39-32, P in 7-0).
    pub fn packed_registers(&self) -> u64 {
        u64::from_be_bytes([0, 0, 0, self.a, self.x, self.y, self.s, self.p])
    }

    /// Status register as flags.
    pub fn flags(&self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.p)
    }

    /// Formats the state into a fixed-size buffer.
    ///
    /// ```
    /// use drive6502::CpuState;
    ///
    /// let state = CpuState { pc: 0xEAA0, a: 0x42, x: 0x00, y: 0x10, s: 0xFF, p: 0xA5 };
    /// assert_eq!(state.trace_line().as_str(), "PC:EAA0 A:42 X:00 Y:10 S:FF P:A5 Nv-bdIzC");
    /// ```
    pub fn trace_line(&self) -> TraceLine {
        let mut line = TraceLine {
            buf: [b' '; TRACE_LINE_WIDTH],
        };
        let mut cursor = LineCursor {
            buf: &mut line.buf,
            pos: 0,
        };
        // The widest state fills the buffer exactly
        let written = self.write_trace(&mut cursor);
        debug_assert!(written.is_ok() && cursor.pos == TRACE_LINE_WIDTH);
        line
    }

    fn write_trace(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} S:{:02X} P:{:02X} ",
            self.pc, self.a, self.x, self.y, self.s, self.p
        )?;
        for (bit, &letter) in FLAG_LETTERS.iter().enumerate() {
            let set = self.p & (0x80 >> bit) != 0;
            out.write_char(if set { letter } else { letter.to_ascii_lowercase() })?;
        }
        Ok(())
    }
}

/// `fmt::Write` over a fixed buffer. Writes that would run past the end fail
/// and leave the buffer untouched.
struct LineCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for LineCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos + s.len();
        let slot = self.buf.get_mut(self.pos..end).ok_or(fmt::Error)?;
        slot.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trace_line().as_str())
    }
}

/// A formatted trace line held in a buffer sized for the widest possible
/// output, so formatting can never run past its end.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    buf: [u8; TRACE_LINE_WIDTH],
}

impl TraceLine {
    /// The line as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written into the buffer.
        std::str::from_utf8(&self.buf).unwrap_or_default()
    }

    /// The line as raw ASCII bytes.
    pub fn as_bytes(&self) -> &[u8; TRACE_LINE_WIDTH] {
        &self.buf
    }
}

impl std::ops::Deref for TraceLine {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
