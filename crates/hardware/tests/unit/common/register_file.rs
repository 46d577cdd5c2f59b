//! Register File Tests.

use pipesim_core::common::{NUM_REGS, RegisterFile};
use rstest::rstest;

#[test]
fn power_on_state_is_all_zero() {
    let regs = RegisterFile::new();
    assert_eq!(regs.snapshot(), [0; NUM_REGS]);
}

#[rstest]
#[case(1, 42)]
#[case(15, -7)]
#[case(31, i32::MIN)]
fn write_then_read(#[case] idx: usize, #[case] val: i32) {
    let mut regs = RegisterFile::new();
    regs.write(idx, val);
    assert_eq!(regs.read(idx), val);
}

#[test]
fn x0_reads_zero_even_before_enforcement() {
    let mut regs = RegisterFile::new();
    regs.write(0, 99);
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.snapshot()[0], 0);
}

#[test]
fn zero_x0_clears_raw_storage() {
    let mut regs = RegisterFile::new();
    regs.write(0, 99);
    assert_eq!(regs.raw(0), 99);
    regs.zero_x0();
    assert_eq!(regs.raw(0), 0);
    assert_eq!(regs, RegisterFile::new());
}

#[test]
fn dump_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(5, 1234);
    let dump = regs.dump();
    assert_eq!(dump.lines().count(), NUM_REGS / 4);
    assert!(dump.contains("x5 =1234"), "dump was:\n{dump}");
    assert!(dump.contains("x31="));
}
