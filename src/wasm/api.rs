//! WASM API for the drive emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupts and
//! state inspection.

use crate::{Drive1541Memory, ExecutionError, Firmware, FirmwareError, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<FirmwareError> for JsError {
    fn from(err: FirmwareError) -> Self {
        JsError::new(&err.to_string())
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// A 1541 drive CPU for JavaScript hosts
#[wasm_bindgen]
pub struct DriveEmulator {
    cpu: CPU<Drive1541Memory>,
}

#[wasm_bindgen]
impl DriveEmulator {
    /// Create a drive from a 16 KiB firmware image and reset it
    #[wasm_bindgen(constructor)]
    pub fn new(firmware: &[u8]) -> Result<DriveEmulator, JsError> {
        let firmware = Firmware::from_bytes(firmware)?;
        Ok(DriveEmulator {
            cpu: CPU::new(Drive1541Memory::new(firmware)),
        })
    }

    /// Hard reset: clears RAM and reloads PC from the reset vector
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute at least `cycles` cycles and return the number actually used,
    /// saturated to `u32::MAX`
    pub fn run(&mut self, cycles: u32) -> Result<u32, JsError> {
        let used = self.cpu.run(cycles as u64)?;
        Ok(saturate_cycles(used))
    }

    /// Request a maskable interrupt; returns whether it was taken
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    /// Trigger a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    /// Current state as a fixed-width trace line
    pub fn trace(&self) -> String {
        self.cpu.trace_line().to_string()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // JavaScript has no u64
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte through the drive memory map
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte; writes outside RAM are dropped
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as u16) << 8;
        let bytes: Vec<u8> = (0..256u16)
            .map(|i| self.cpu.memory().read(start | i))
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }
}

fn saturate_cycles(used: u64) -> u32 {
    u32::try_from(used).unwrap_or(u32::MAX)
}
