//! Fuzz target for running arbitrary drive firmware.
//!
//! Builds a firmware image from the input, seeds RAM, starts from an arbitrary
//! register state and runs a bounded cycle budget with interrupts interleaved.
//! Faults are expected; panics are bugs.

#![no_main]

use arbitrary::Arbitrary;
use drive6502::{Drive1541Memory, ExecutionError, Firmware, MemoryBus, CPU, FIRMWARE_SIZE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register state applied after reset
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    /// Start of the firmware image; the rest is zero-filled
    firmware: Vec<u8>,
    /// Zero page and stack page contents
    low_ram: [u8; 512],
    /// Cycle budget per slice
    budget: u16,
    /// Interrupt to raise between slices: 0 none, 1 IRQ, 2 NMI
    interrupts: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut image = vec![0u8; FIRMWARE_SIZE];
    let len = input.firmware.len().min(FIRMWARE_SIZE);
    image[..len].copy_from_slice(&input.firmware[..len]);

    let Ok(firmware) = Firmware::from_bytes(&image) else {
        return;
    };
    let mut cpu = CPU::new(Drive1541Memory::new(firmware));

    for (addr, &byte) in input.low_ram.iter().enumerate() {
        cpu.memory_mut().write(addr as u16, byte);
    }

    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(input.registers.status);

    for interrupt in input.interrupts.iter().take(16) {
        match interrupt % 3 {
            1 => {
                cpu.irq();
            }
            2 => cpu.nmi(),
            _ => {}
        }

        let before = cpu.cycles();
        match cpu.run(input.budget as u64) {
            Ok(used) => {
                assert!(used >= input.budget as u64);
                assert_eq!(cpu.cycles(), before + used);
            }
            Err(ExecutionError::IllegalOpcode { opcode, pc }) => {
                // Fault leaves PC on the offending byte
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.memory().read(pc), opcode);
                break;
            }
        }

        // Bit 5 always reads as set
        assert_eq!(cpu.status() & 0x20, 0x20);
        assert_eq!(cpu.trace_line().len(), drive6502::TRACE_LINE_WIDTH);
    }
});
