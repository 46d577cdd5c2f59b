//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for one run. It provides:
//! 1. **Cycles and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, system).
//! 3. **Stalls and flushes:** Load-use stalls, memory-latency stalls, and branch flushes.
//! 4. **Cache:** Hit/miss counts and the total latency reported by the cache.
//!
//! Counters only grow during a run and are cleared when the simulator is reset.

use std::fmt::Write as _;

use serde::Serialize;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed Execute.
    pub instructions_retired: u64,

    /// Count of ADD/SUB/ADDI instructions retired.
    pub inst_alu: u64,
    /// Count of LOAD instructions retired.
    pub inst_load: u64,
    /// Count of STORE instructions retired.
    pub inst_store: u64,
    /// Count of BEQ/JAL instructions retired.
    pub inst_branch: u64,
    /// Count of NOP/HALT (and unrecognized) instructions retired.
    pub inst_system: u64,

    /// Taken BEQ/JAL instructions.
    pub branches_taken: u64,
    /// Fetch latch flushes caused by taken branches.
    pub flushes: u64,

    /// Issue stalls due to load-use hazards.
    pub stalls_data: u64,
    /// Cycles the pipeline was frozen waiting on memory latency.
    pub stalls_mem: u64,

    /// Data cache hit count.
    pub cache_hits: u64,
    /// Data cache miss count.
    pub cache_misses: u64,
    /// Sum of the latencies reported by every cache access.
    pub mem_latency_cycles: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`, `"instruction_mix"`, `"memory"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "instruction_mix", "memory"];

impl SimStats {
    /// Cycles per retired instruction; `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle; `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Total stall cycles of every kind.
    pub const fn total_stalls(&self) -> u64 {
        self.stalls_data + self.stalls_mem
    }

    /// Fraction of cache accesses that hit; `0.0` with no accesses.
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Renders the requested statistics sections as text.
    ///
    /// Each element of `sections` should be one of `STATS_SECTIONS`. An empty
    /// slice renders everything.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "PIPELINE SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "sim_ipc                  {:.4}", self.ipc());
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("pipeline") {
            let _ = writeln!(out, "PIPELINE");
            let _ = writeln!(
                out,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                self.stalls_data as f64 / cyc * 100.0
            );
            let _ = writeln!(
                out,
                "  stalls.memory          {} ({:.2}%)",
                self.stalls_mem,
                self.stalls_mem as f64 / cyc * 100.0
            );
            let _ = writeln!(out, "  flushes                {}", self.flushes);
            let _ = writeln!(out, "  branches.taken         {}", self.branches_taken);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(
                    out,
                    "  {name:<22} {count} ({:.2}%)",
                    count as f64 / instr * 100.0
                );
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("memory") {
            let total = self.cache_hits + self.cache_misses;
            let _ = writeln!(out, "MEMORY");
            let _ = writeln!(
                out,
                "  L1-D   accesses: {:<10} | hits: {:<10} | miss_rate: {:.2}%",
                total,
                self.cache_hits,
                if total > 0 {
                    100.0 - self.cache_hit_rate() * 100.0
                } else {
                    0.0
                }
            );
            let _ = writeln!(out, "  latency.total          {}", self.mem_latency_cycles);
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
