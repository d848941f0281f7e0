//! Tests for CMP, CPX and CPY.

mod common;

use common::setup_cpu;
use drive6502::MemoryBus;

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]); // CMP #$42
    cpu.set_a(0x42);

    cpu.step().unwrap();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater() {
    let mut cpu = setup_cpu(&[0xC9, 0x10]);
    cpu.set_a(0x20);

    cpu.step().unwrap();
    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let mut cpu = setup_cpu(&[0xC9, 0x20]);
    cpu.set_a(0x10);

    cpu.step().unwrap();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n()); // 0x10 - 0x20 = 0xF0
}

#[test]
fn test_cmp_is_unsigned() {
    let mut cpu = setup_cpu(&[0xC9, 0x01]);
    cpu.set_a(0x80);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n()); // 0x7F
}

#[test]
fn test_cmp_absolute_y_page_cross() {
    let mut cpu = setup_cpu(&[0xD9, 0xFF, 0x03]); // CMP $03FF,Y
    cpu.memory_mut().write(0x0400, 0x05);
    cpu.set_y(0x01);
    cpu.set_a(0x05);

    assert_eq!(cpu.step().unwrap(), 5);
    assert!(cpu.flag_z());
}

#[test]
fn test_cmp_leaves_overflow() {
    let mut cpu = setup_cpu(&[0xC9, 0x7F]);
    cpu.set_a(0x80);
    cpu.set_flag_v(false);

    cpu.step().unwrap();
    assert!(!cpu.flag_v());
}

#[test]
fn test_cpx_zero_page() {
    let mut cpu = setup_cpu(&[0xE4, 0x10]); // CPX $10
    cpu.memory_mut().write(0x0010, 0x05);
    cpu.set_x(0x05);

    assert_eq!(cpu.step().unwrap(), 3);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.x(), 0x05);
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu(&[0xCC, 0x00, 0x02]); // CPY $0200
    cpu.memory_mut().write(0x0200, 0x06);
    cpu.set_y(0x05);

    assert_eq!(cpu.step().unwrap(), 4);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}
