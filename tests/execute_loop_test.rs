//! Tests for `step`, `run` and the illegal-opcode fault.

mod common;

use common::setup_cpu;
use drive6502::{ExecutionError, MemoryBus};

#[test]
fn test_load_store_then_idle_loop() {
    // C000: LDA #$42 ; STA $10 ; C004: JMP $C004
    let mut cpu = setup_cpu(&[0xA9, 0x42, 0x85, 0x10, 0x4C, 0x04, 0xC0]);

    let used = cpu.run(20).unwrap();
    assert!(used >= 20);
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.pc(), 0xC004);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_run_zero_executes_nothing() {
    let mut cpu = setup_cpu(&[0xA9, 0x01]);

    assert_eq!(cpu.run(0).unwrap(), 0);
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_run_overshoots_by_last_instruction() {
    // JSR costs 6: a budget of 1 still runs the whole instruction
    let mut cpu = setup_cpu(&[0x20, 0x00, 0xD0]);

    assert_eq!(cpu.run(1).unwrap(), 6);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_run_accumulates_across_slices() {
    let mut cpu = setup_cpu(&[]);

    cpu.run(100).unwrap();
    cpu.run(100).unwrap();
    assert_eq!(cpu.cycles(), 200);
    assert_eq!(cpu.pc(), 0xC064);
}

#[test]
fn test_illegal_opcode_faults() {
    // NOP ; illegal $02
    let mut cpu = setup_cpu(&[0xEA, 0x02]);

    let err = cpu.run(10).unwrap_err();
    assert_eq!(
        err,
        ExecutionError::IllegalOpcode {
            opcode: 0x02,
            pc: 0xC001
        }
    );
    assert_eq!(cpu.pc(), 0xC001);
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(err.to_string(), "illegal opcode $02 at $C001");
}

#[test]
fn test_illegal_opcode_fault_repeats_until_moved() {
    let mut cpu = setup_cpu(&[0xFF, 0xEA]);

    assert!(cpu.step().is_err());
    assert!(cpu.step().is_err());
    assert_eq!(cpu.cycles(), 0);

    cpu.set_pc(0xC001);
    assert_eq!(cpu.step().unwrap(), 2);
}

#[test]
fn test_reset_recovers_from_fault() {
    let mut cpu = setup_cpu(&[0xA9, 0x05, 0x85, 0x00, 0x12]);

    assert!(cpu.run(100).is_err());
    assert_eq!(cpu.memory().read(0x0000), 0x05);

    cpu.reset();
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), 0x24);
    // Hard reset clears RAM
    assert_eq!(cpu.memory().read(0x0000), 0x00);
}

#[test]
fn test_step_sums_to_cycles() {
    // LDA #$01 ; STA $0200 ; INC $0200 ; NOP
    let mut cpu = setup_cpu(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEE, 0x00, 0x02, 0xEA]);

    let total: u64 = (0..4).map(|_| cpu.step().unwrap() as u64).sum();
    assert_eq!(total, 2 + 4 + 6 + 2);
    assert_eq!(total, cpu.cycles());
    assert_eq!(cpu.memory().read(0x0200), 0x02);
}

#[test]
fn test_run_unbounded_budget_stops_at_fault() {
    // Three NOPs then illegal $02; one step first so the cycle counter is nonzero
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0xEA, 0x02]);
    cpu.step().unwrap();

    let err = cpu.run(u64::MAX).unwrap_err();
    assert_eq!(
        err,
        ExecutionError::IllegalOpcode {
            opcode: 0x02,
            pc: 0xC003
        }
    );
    assert_eq!(cpu.cycles(), 6);
    assert_eq!(cpu.pc(), 0xC003);
}
