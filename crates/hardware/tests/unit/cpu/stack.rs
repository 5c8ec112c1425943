//! # Stack Tests

use ls8sim_core::common::constants::INITIAL_SP;
use ls8sim_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::{TEST_STEP_LIMIT, TestContext, run_program};

#[test]
fn test_push_writes_below_sp() {
    let program = ProgramBuilder::new().ldi(0, 42).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.sp(), INITIAL_SP - 1);
    assert_eq!(ctx.mem(usize::from(INITIAL_SP - 1)), 42);
}

#[test]
fn test_push_pop_round_trip_restores_sp() {
    let program = ProgramBuilder::new().ldi(0, 42).push(0).pop(1).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.reg(1), 42);
    assert_eq!(ctx.sp(), INITIAL_SP);
}

#[test]
fn test_stack_is_lifo() {
    // The stack.ls8 demo: prints 2, 4, 1.
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .ldi(0, 3)
        .pop(0)
        .prn(0)
        .ldi(0, 4)
        .push(0)
        .pop(2)
        .pop(1)
        .prn(2)
        .prn(1)
        .hlt()
        .build();
    assert_eq!(run_program(&program), vec![2, 4, 1]);
}

#[test]
fn test_pop_from_empty_stack_reads_reset_sp_cell() {
    let program = ProgramBuilder::new().pop(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    ctx.cpu_mut().ram.write(usize::from(INITIAL_SP), 0x77).unwrap();
    let _ = ctx.run_ok();
    assert_eq!(ctx.reg(0), 0x77);
    assert_eq!(ctx.sp(), INITIAL_SP + 1);
}

#[test]
fn test_sp_wraps_at_zero() {
    let program = ProgramBuilder::new().ldi(7, 0).ldi(0, 9).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.sp(), 255);
    assert_eq!(ctx.mem(255), 9);
}

#[test]
fn test_push_can_overwrite_program() {
    // Pointing SP at the program lets a PUSH clobber code; the machine
    // does not protect against it.
    let program = ProgramBuilder::new().ldi(7, 4).ldi(0, 0xAA).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.mem(3), 0xAA);
}

#[test]
fn test_peak_stack_depth() {
    let program = ProgramBuilder::new()
        .push(0)
        .push(0)
        .push(0)
        .pop(0)
        .pop(0)
        .push(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.cpu().stats.peak_stack_depth, 3);
    assert_eq!(ctx.cpu().stats.stack_ops, 6);
}

#[test]
fn test_peak_stack_depth_ignores_sp_above_reset() {
    let program = ProgramBuilder::new().pop(0).pop(0).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.sp(), ctx.cpu().initial_sp() + 1);
    assert_eq!(ctx.cpu().stats.peak_stack_depth, 0);
}

#[test]
fn test_peak_stack_depth_with_configured_sp() {
    let mut config = Config::default();
    config.general.max_steps = Some(TEST_STEP_LIMIT);
    config.system.initial_sp = 0x80;
    let program = ProgramBuilder::new().push(0).push(0).pop(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load(&program);
    let _ = ctx.run_ok();
    assert_eq!(ctx.cpu().initial_sp(), 0x80);
    assert_eq!(ctx.sp(), ctx.cpu().initial_sp() - 1);
    assert_eq!(ctx.cpu().stats.peak_stack_depth, 2);
}
