//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C as [`StatusFlags`]
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The host drives the CPU in bounded slices:
//! - `step()`: Execute one instruction
//! - `run()`: Execute until a cycle budget is exhausted
//! - `irq()` / `nmi()`: Enter an interrupt between slices
//!
//! Instructions always run to completion; the budget is only checked between
//! them, so a slice may overshoot by the cost of its last instruction.

use log::{debug, log_enabled, trace, warn, Level};

use crate::state::{CpuState, TraceLine};
use crate::{instructions, ExecutionError, MemoryBus, StatusFlags, OPCODE_TABLE};

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer after reset.
pub const RESET_SP: u8 = 0xFD;

/// Cycles taken by the IRQ/NMI entry sequence.
pub const INTERRUPT_CYCLES: u8 = 7;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, and cycle counter. It is generic over the memory implementation via the
/// `MemoryBus` trait and owns its memory exclusively.
///
/// # Examples
///
/// ```
/// use drive6502::{Drive1541Memory, Firmware, CPU};
///
/// let mut image = vec![0xEA; 16384];
/// image[0x3FFC] = 0x00; // Low byte
/// image[0x3FFD] = 0xC0; // High byte (PC = 0xC000)
///
/// let cpu = CPU::new(Drive1541Memory::new(Firmware::from_bytes(&image).unwrap()));
///
/// assert_eq!(cpu.pc(), 0xC000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) p: StatusFlags,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and resets it.
    ///
    /// See [`CPU::reset`] for the resulting state.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: RESET_SP,
            p: StatusFlags::POWER_ON,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Hard-resets the emulated system.
    ///
    /// - RAM is cleared through [`MemoryBus::reset`]
    /// - A, X and Y are zeroed
    /// - Stack pointer is set to 0xFD
    /// - Status is set to the power-on pattern (I and the reserved bit set)
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - Cycle counter is reset to 0
    ///
    /// Idempotent; may be called at any time.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.p = StatusFlags::POWER_ON;
        self.pc = self.memory.read16(RESET_VECTOR);
        self.cycles = 0;
        debug!("cpu reset: pc=${:04X}", self.pc);
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up instruction metadata in opcode table
    /// 3. Resolve operands and execute (operand fetches advance PC)
    /// 4. Add base cycles plus any page-crossing/branch penalty
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::IllegalOpcode`] for undocumented opcodes. No
    /// state changes: PC is left on the offending byte and no cycles are
    /// charged, so the fault repeats until the host resets or moves PC.
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if log_enabled!(Level::Trace) {
            trace!("{}", self.trace_line());
        }

        let opcode_pc = self.pc;
        let opcode = self.fetch_byte();
        let metadata = &OPCODE_TABLE[opcode as usize];

        if !metadata.is_legal() {
            self.pc = opcode_pc;
            warn!("illegal opcode ${:02X} at ${:04X}", opcode, opcode_pc);
            return Err(ExecutionError::IllegalOpcode {
                opcode,
                pc: opcode_pc,
            });
        }

        let penalty = instructions::execute(self, metadata);
        let cycles = metadata.base_cycles + penalty;
        self.cycles += cycles as u64;

        Ok(cycles)
    }

    /// Runs the CPU for a cycle budget.
    ///
    /// Executes instructions until at least `cycle_budget` cycles have been
    /// consumed and returns the actual count, which may exceed the budget by
    /// the cost of the final instruction. A budget of 0 executes nothing and
    /// `u64::MAX` runs until the first fault.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal opcode. Cycles consumed before the fault are
    /// still counted in [`CPU::cycles`].
    ///
    /// # Examples
    ///
    /// ```
    /// use drive6502::{Drive1541Memory, Firmware, CPU};
    ///
    /// let mut image = vec![0xEA; 16384]; // NOPs, 2 cycles each
    /// image[0x3FFC] = 0x00;
    /// image[0x3FFD] = 0xC0;
    ///
    /// let mut cpu = CPU::new(Drive1541Memory::new(Firmware::from_bytes(&image).unwrap()));
    ///
    /// assert_eq!(cpu.run(10).unwrap(), 10);
    /// assert_eq!(cpu.run(5).unwrap(), 6); // Overshoots by the last NOP
    /// assert_eq!(cpu.pc(), 0xC008);
    /// ```
    pub fn run(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;

        while self.cycles - start_cycles < cycle_budget {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Requests a maskable interrupt.
    ///
    /// If the I flag is clear, pushes PC (high byte first) and status (B
    /// clear), sets I and jumps through the IRQ vector at 0xFFFE/0xFFFF.
    /// Returns whether the interrupt was taken; when I is set nothing changes.
    ///
    /// Must be called between instructions (i.e. between `step`/`run` calls).
    pub fn irq(&mut self) -> bool {
        if self.p.contains(StatusFlags::INTERRUPT_DISABLE) {
            trace!("irq masked at ${:04X}", self.pc);
            return false;
        }
        debug!("irq at ${:04X}", self.pc);
        self.interrupt(IRQ_VECTOR);
        true
    }

    /// Triggers a non-maskable interrupt.
    ///
    /// Same entry sequence as [`CPU::irq`] but through the NMI vector at
    /// 0xFFFA/0xFFFB, regardless of the I flag.
    pub fn nmi(&mut self) {
        debug!("nmi at ${:04X}", self.pc);
        self.interrupt(NMI_VECTOR);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push_byte(self.p.to_pushed(false));
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.memory.read16(vector);
        self.cycles += INTERRUPT_CYCLES as u64;
    }

    // ========== Fetch and Stack Helpers ==========

    /// Reads the byte at PC and advances PC.
    #[inline]
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two.
    #[inline]
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte();
        let hi = self.fetch_byte();
        u16::from_le_bytes([lo, hi])
    }

    /// Writes to `$0100 + SP`, then decrements SP (wrapping).
    #[inline]
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write_stack(self.sp, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads `$0100 + SP`.
    #[inline]
    pub(crate) fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read_stack(self.sp)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_byte(hi);
        self.push_byte(lo);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let value = self.memory.read16_stack(self.sp.wrapping_add(1));
        self.sp = self.sp.wrapping_add(2);
        value
    }

    // ========== State Inspection ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns A, X, Y, SP and P packed into one word.
    ///
    /// Layout, most significant first: `A:X:Y:S:P` in bits 39-0.
    ///
    /// ```
    /// use drive6502::{Drive1541Memory, Firmware, CPU};
    ///
    /// let cpu = CPU::new(Drive1541Memory::new(Firmware::from_bytes(&[0; 16384]).unwrap()));
    /// assert_eq!(cpu.registers(), 0x00_00_00_FD_24);
    /// ```
    pub fn registers(&self) -> u64 {
        self.state().packed_registers()
    }

    /// Returns a copy of the full processor state.
    pub fn state(&self) -> CpuState {
        CpuState {
            pc: self.pc,
            a: self.a,
            x: self.x,
            y: self.y,
            s: self.sp,
            p: self.status(),
        }
    }

    /// Formats the current state as a fixed-width trace line.
    pub fn trace_line(&self) -> TraceLine {
        self.state().trace_line()
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte. Bit 5 always reads 1.
    pub fn status(&self) -> u8 {
        (self.p | StatusFlags::UNUSED).bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> StatusFlags {
        self.p | StatusFlags::UNUSED
    }

    /// Returns the total number of CPU cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.contains(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.contains(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.contains(StatusFlags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.contains(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.contains(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.contains(StatusFlags::CARRY)
    }

    // ========== Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the status register from a byte. B is dropped, bit 5 forced on.
    pub fn set_status(&mut self, value: u8) {
        self.p = StatusFlags::from_pulled(value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(StatusFlags::CARRY, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(StatusFlags::ZERO, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(StatusFlags::INTERRUPT_DISABLE, value);
    }

    /// Sets or clears the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(StatusFlags::DECIMAL, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(StatusFlags::OVERFLOW, value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(StatusFlags::NEGATIVE, value);
    }
}
