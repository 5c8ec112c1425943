//! # ALU Instruction Tests
//!
//! Each case loads two registers, applies one ALU instruction, and checks
//! the destination register. The source register must be unchanged.

use ls8sim_core::isa::opcodes::*;
use rstest::rstest;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

fn run_binary(opcode: u8, a: u8, b: u8) -> TestContext {
    let program = ProgramBuilder::new()
        .ldi(0, a)
        .ldi(1, b)
        .alu(opcode, 0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    ctx
}

#[rstest]
#[case(ADD, 2, 3, 5)]
#[case(ADD, 255, 2, 1)]
#[case(SUB, 3, 5, 254)]
#[case(MUL, 8, 9, 72)]
#[case(MUL, 20, 20, 144)]
#[case(DIV, 72, 8, 9)]
#[case(MOD, 73, 8, 1)]
#[case(AND, 0b1010_1010, 0b1111_0000, 0b1010_0000)]
#[case(OR, 0b1010_1010, 0b0101_0101, 0b1111_1111)]
#[case(XOR, 0b1111_0000, 0b1010_1010, 0b0101_1010)]
#[case(SHL, 0b0000_0011, 2, 0b0000_1100)]
#[case(SHR, 0b1100_0000, 6, 0b0000_0011)]
fn test_binary_alu(#[case] opcode: u8, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    let ctx = run_binary(opcode, a, b);
    assert_eq!(ctx.reg(0), expected);
    assert_eq!(ctx.reg(1), b);
}

#[rstest]
#[case(INC, 41, 42)]
#[case(INC, 255, 0)]
#[case(DEC, 0, 255)]
#[case(NOT, 0b0101_0101, 0b1010_1010)]
fn test_unary_alu(#[case] opcode: u8, #[case] a: u8, #[case] expected: u8) {
    let program = ProgramBuilder::new().ldi(3, a).alu1(opcode, 3).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.reg(3), expected);
}

#[test]
fn test_mul_same_register() {
    let program = ProgramBuilder::new().ldi(2, 12).alu(MUL, 2, 2).prn(2).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    assert_eq!(ctx.run_ok(), vec![144]);
}

#[test]
fn test_alu_counts_in_stats() {
    let ctx = run_binary(ADD, 1, 1);
    assert_eq!(ctx.cpu().stats.inst_alu, 1);
}
