//! Core processor implementation.
//!
//! This module contains the CPU, its instruction pipeline, and the execution
//! units (ALU and data cache) the pipeline drives.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, data cache).
pub mod units;

pub use self::cpu::Cpu;
