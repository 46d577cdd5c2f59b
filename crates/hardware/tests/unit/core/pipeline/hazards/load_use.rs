//! Load-Use Hazard Detection Tests.
//!
//! Verifies that `need_stall_load_use` detects when the instruction waiting in
//! IF/ID reads the destination of the LOAD that just executed, and that the
//! pipeline pays exactly one stall cycle for it.

use pipesim_core::core::pipeline::hazards::{has_dependency, need_stall_load_use};
use pipesim_core::core::pipeline::latches::{IdExEntry, IfId, IfIdEntry};
use pipesim_core::core::pipeline::signals::ControlSignals;
use pipesim_core::isa::Instruction;
use rstest::rstest;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

/// Helper: an ID/EX entry for `inst` with its real control signals.
fn entry(inst: Instruction) -> IdExEntry {
    IdExEntry {
        pc: 0,
        inst,
        ctrl: ControlSignals::for_opcode(inst.op),
    }
}

/// Helper: an IF/ID latch holding `inst`.
fn waiting(inst: Instruction) -> IfId {
    IfId {
        entry: Some(IfIdEntry { pc: 1, inst }),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Dependency predicate
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::alu(Instruction::add(4, 1, 2), 4, true)]
#[case::addi(Instruction::addi(4, 1, 2), 4, true)]
#[case::load(Instruction::load(4, 1, 0), 4, true)]
#[case::jal(Instruction::jal(4, 3), 4, true)]
#[case::other_reg(Instruction::add(4, 1, 2), 5, false)]
#[case::store_has_no_destination(Instruction::store(4, 1, 0), 4, false)]
#[case::beq_has_no_destination(Instruction::beq(4, 4, 1), 4, false)]
#[case::nop(Instruction::nop(), 0, false)]
#[case::halt(Instruction::halt(), 0, false)]
fn dependency(#[case] older: Instruction, #[case] reg: usize, #[case] want: bool) {
    assert_eq!(has_dependency(reg, Some(&entry(older))), want);
}

#[test]
fn x0_never_carries_a_dependency() {
    assert!(!has_dependency(0, Some(&entry(Instruction::load(0, 1, 0)))));
}

#[test]
fn bubble_never_carries_a_dependency() {
    assert!(!has_dependency(3, None));
}

// ══════════════════════════════════════════════════════════
// 2. Stall predicate
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::rs1(Instruction::add(2, 5, 0), true)]
#[case::rs2(Instruction::sub(2, 0, 5), true)]
#[case::addi_base(Instruction::addi(2, 5, 1), true)]
#[case::load_base(Instruction::load(2, 5, 0), true)]
#[case::store_data(Instruction::store(5, 0, 1), true)]
#[case::store_base(Instruction::store(1, 5, 1), true)]
#[case::beq(Instruction::beq(0, 5, 2), true)]
#[case::independent(Instruction::add(2, 3, 4), false)]
#[case::writes_same_reg_only(Instruction::addi(5, 0, 1), false)]
#[case::jal_reads_nothing(Instruction::jal(5, 1), false)]
#[case::halt(Instruction::halt(), false)]
fn stall_after_load_x5(#[case] next: Instruction, #[case] want: bool) {
    let load = entry(Instruction::load(5, 0, 0));
    assert_eq!(need_stall_load_use(Some(&load), &waiting(next)), want);
}

#[test]
fn no_stall_when_producer_is_not_a_load() {
    let alu = entry(Instruction::addi(5, 0, 1));
    assert!(!need_stall_load_use(
        Some(&alu),
        &waiting(Instruction::add(2, 5, 5))
    ));
}

#[test]
fn no_stall_without_producer_or_consumer() {
    let load = entry(Instruction::load(5, 0, 0));
    assert!(!need_stall_load_use(None, &waiting(Instruction::add(2, 5, 5))));
    assert!(!need_stall_load_use(Some(&load), &IfId::default()));
}

#[test]
fn load_into_x0_does_not_stall() {
    let load = entry(Instruction::load(0, 0, 0));
    assert!(!need_stall_load_use(
        Some(&load),
        &waiting(Instruction::add(2, 0, 0))
    ));
}

// ══════════════════════════════════════════════════════════
// 3. Pipeline timing
// ══════════════════════════════════════════════════════════

#[test]
fn dependent_reader_costs_exactly_one_stall() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .load(1, 0, 0)
            .add(2, 1, 1)
            .halt(),
    );
    ctx.sim.load_memory(0, &[21]).unwrap();
    let stats = ctx.run();

    assert_eq!(ctx.get_reg(2), 42);
    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.cycles, 6);
}

#[test]
fn intervening_instruction_hides_the_load() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .load(1, 0, 0)
            .addi(3, 0, 1)
            .add(2, 1, 1)
            .halt(),
    );
    ctx.sim.load_memory(0, &[21]).unwrap();
    let stats = ctx.run();

    assert_eq!(ctx.get_reg(2), 42);
    assert_eq!(stats.stalls_data, 0);
    assert_eq!(stats.cycles, 6);
}

#[test]
fn store_of_loaded_value_stalls() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .load(1, 0, 0)
            .store(1, 0, 1)
            .halt(),
    );
    ctx.sim.load_memory(0, &[9]).unwrap();
    let stats = ctx.run();

    assert_eq!(ctx.mem(1), 9);
    assert_eq!(stats.stalls_data, 1);
}

#[test]
fn stalled_instruction_stays_in_if_id() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .load(1, 0, 0)
            .add(2, 1, 1)
            .halt(),
    );
    ctx.tick_n(3);

    let held = ctx.cpu().if_id.entry.expect("consumer held in IF/ID");
    assert_eq!(held.pc, 1);
    assert!(!ctx.cpu().id_ex.is_valid());
    assert_eq!(ctx.cpu().pc, 2, "fetch does not advance during the stall");
    assert_eq!(ctx.stats().stalls_data, 1);
}
