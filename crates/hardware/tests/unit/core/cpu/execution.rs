//! CPU Cycle Tests.
//!
//! Verifies the per-cycle ordering, register-zero enforcement, the optional
//! memory-latency freeze, and reset.

use pipesim_core::config::Config;
use pipesim_core::core::Cpu;
use pipesim_core::isa::Program;
use pretty_assertions::assert_eq;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn halt_only_program_takes_three_cycles() {
    let mut ctx = TestContext::from_builder(ProgramBuilder::new().halt());
    let stats = ctx.run();
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.instructions_retired, 1);
}

#[test]
fn empty_program_halts_on_synthesized_halt() {
    let mut ctx = TestContext::new(Program::default());
    let stats = ctx.run();
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.instructions_retired, 1);
}

#[test]
fn straight_line_program_fills_the_pipeline() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .addi(1, 0, 1)
            .addi(2, 0, 2)
            .addi(3, 0, 3)
            .add(4, 1, 2)
            .halt(),
    );
    let stats = ctx.run();
    assert_eq!(stats.cycles, 7);
    assert_eq!(ctx.get_reg(4), 3);
}

#[test]
fn x0_is_zero_after_every_cycle() {
    let mut ctx = TestContext::from_builder(
        ProgramBuilder::new()
            .addi(0, 0, 5)
            .add(1, 0, 0)
            .jal(0, 2)
            .nop()
            .halt(),
    );
    while !ctx.sim.is_halted() {
        ctx.tick_n(1);
        assert_eq!(ctx.cpu().regs.raw(0), 0);
    }
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn halted_core_does_not_advance() {
    let mut ctx = TestContext::from_builder(ProgramBuilder::new().halt());
    let stats = ctx.run();
    ctx.tick_n(5);
    assert_eq!(ctx.stats(), &stats);
}

#[test]
fn pipeline_latches_move_one_stage_per_cycle() {
    let mut ctx = TestContext::from_builder(ProgramBuilder::new().nop().nop().halt());

    ctx.tick_n(1);
    assert_eq!(ctx.cpu().if_id.entry.map(|e| e.pc), Some(0));
    assert!(!ctx.cpu().id_ex.is_valid());

    ctx.tick_n(1);
    assert_eq!(ctx.cpu().if_id.entry.map(|e| e.pc), Some(1));
    assert_eq!(ctx.cpu().id_ex.entry.map(|e| e.pc), Some(0));

    ctx.tick_n(1);
    assert_eq!(ctx.stats().instructions_retired, 1);
    assert_eq!(ctx.cpu().id_ex.entry.map(|e| e.pc), Some(1));
}

// ══════════════════════════════════════════════════════════
// Memory-latency freeze
// ══════════════════════════════════════════════════════════

fn latency_config() -> Config {
    let mut config = Config::default();
    config.pipeline.model_memory_latency = true;
    config
}

#[test]
fn miss_freezes_pipeline_for_latency_minus_one() {
    let mut ctx =
        TestContext::with_config(ProgramBuilder::new().load(1, 0, 0).halt().build(), &latency_config());
    let stats = ctx.run();

    assert_eq!(stats.stalls_mem, 9);
    assert_eq!(stats.cycles, 4 + 9);
    assert_eq!(stats.mem_latency_cycles, 10);
}

#[test]
fn hit_costs_no_freeze() {
    let mut ctx = TestContext::with_config(
        ProgramBuilder::new().load(1, 0, 0).load(2, 0, 0).halt().build(),
        &latency_config(),
    );
    let stats = ctx.run();

    assert_eq!((stats.cache_misses, stats.cache_hits), (1, 1));
    assert_eq!(stats.stalls_mem, 9);
}

#[test]
fn latency_is_accounted_without_freezing_by_default() {
    let mut ctx = TestContext::from_builder(ProgramBuilder::new().load(1, 0, 0).halt());
    let stats = ctx.run();

    assert_eq!(stats.stalls_mem, 0);
    assert_eq!(stats.cycles, 4);
    assert_eq!(stats.mem_latency_cycles, 10);
}

// ══════════════════════════════════════════════════════════
// Reset
// ══════════════════════════════════════════════════════════

#[test]
fn reset_restores_power_on_state() {
    let program = ProgramBuilder::new()
        .addi(1, 0, 7)
        .store(1, 0, 3)
        .halt()
        .build();
    let mut cpu = Cpu::new(program.clone(), &Config::default()).unwrap();
    while !cpu.is_halted() {
        cpu.tick().unwrap();
    }
    assert_eq!(cpu.mem_word(3).unwrap(), 7);

    cpu.reset();
    let fresh = Cpu::new(program, &Config::default()).unwrap();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.regs, fresh.regs);
    assert_eq!(cpu.stats, fresh.stats);
    assert_eq!(cpu.mem_word(3).unwrap(), 0);
    assert!(!cpu.l1_d_cache.contains(3));
    assert!(!cpu.if_id.is_valid() && !cpu.id_ex.is_valid());
    assert!(!cpu.is_halted());
}

#[test]
fn dump_state_shows_pc_and_registers() {
    let cpu = Cpu::new(Program::default(), &Config::default()).unwrap();
    let dump = cpu.dump_state();
    assert!(dump.starts_with("PC = 0\n"));
    assert!(dump.contains("x31="));
}
