//! # General-Purpose Register Tests
//!
//! Tests for the eight-entry register file.

use ls8sim_core::common::constants::{INITIAL_SP, SP};
use ls8sim_core::common::error::RegisterError;
use ls8sim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_clears_general_registers() {
    let gpr = Gpr::new();
    for i in 0..7 {
        assert_eq!(gpr.read(i), Ok(0));
    }
}

#[test]
fn test_gpr_new_sets_stack_pointer() {
    let gpr = Gpr::new();
    assert_eq!(gpr.sp(), INITIAL_SP);
    assert_eq!(gpr.read(SP), Ok(INITIAL_SP));
}

#[test]
fn test_gpr_with_sp() {
    let gpr = Gpr::with_sp(0x80);
    assert_eq!(gpr.sp(), 0x80);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 0..8 {
        let value = (i as u8) * 17;
        gpr.write(i, value).unwrap();
        assert_eq!(gpr.read(i), Ok(value));
    }
}

#[test]
fn test_gpr_register_independence() {
    let mut gpr = Gpr::new();
    gpr.write(1, 111).unwrap();
    gpr.write(2, 222).unwrap();
    gpr.write(3, 33).unwrap();

    assert_eq!(gpr.read(1), Ok(111));
    assert_eq!(gpr.read(2), Ok(222));
    assert_eq!(gpr.read(3), Ok(33));
}

#[test]
fn test_gpr_sp_aliases_r7() {
    let mut gpr = Gpr::new();
    gpr.write(7, 0x42).unwrap();
    assert_eq!(gpr.sp(), 0x42);
    gpr.set_sp(0x10);
    assert_eq!(gpr.read(7), Ok(0x10));
}

#[test]
fn test_gpr_read_out_of_range() {
    let gpr = Gpr::new();
    assert_eq!(gpr.read(8), Err(RegisterError::InvalidRegister { index: 8 }));
    assert_eq!(
        gpr.read(255),
        Err(RegisterError::InvalidRegister { index: 255 })
    );
}

#[test]
fn test_gpr_write_out_of_range_leaves_file_untouched() {
    let mut gpr = Gpr::new();
    let before = gpr.snapshot();
    assert_eq!(
        gpr.write(8, 1),
        Err(RegisterError::InvalidRegister { index: 8 })
    );
    assert_eq!(gpr.snapshot(), before);
}

#[test]
fn test_gpr_dump_format() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0x0A).unwrap();
    assert_eq!(gpr.dump(), "0A 00 00 00 00 00 00 F4");
}
