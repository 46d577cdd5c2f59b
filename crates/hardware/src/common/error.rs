//! Simulator error definitions.
//!
//! This module defines the error type shared by every fallible operation in the
//! simulator. It provides:
//! 1. **Run Faults:** Fatal conditions raised while stepping the pipeline
//!    (out-of-bounds memory, runaway execution, strict-mode illegal opcodes),
//!    and any attempt to keep stepping an aborted run.
//! 2. **Setup Faults:** Configuration validation and program loading failures.
//! 3. **Error Handling:** Integration with `std::error::Error` through `thiserror`.
//!
//! Every variant is fatal for the run that produced it; nothing is retried.

use thiserror::Error;

/// Errors produced by the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// A memory read or write addressed a word past the end of main memory.
    #[error("memory access out of bounds: address {addr} (memory holds {size} words)")]
    MemoryOutOfBounds {
        /// Word address that was accessed.
        addr: u32,
        /// Number of words in main memory.
        size: usize,
    },

    /// The step cap was reached without a HALT retiring.
    #[error("max steps exceeded ({max_steps}); possible infinite loop in the simulated program")]
    RunawayProgram {
        /// The step cap that was exceeded.
        max_steps: u64,
    },

    /// The simulator was stepped again after a fatal fault without a reset.
    #[error("run was aborted by an earlier fault; reset before running again")]
    RunAborted,

    /// An unrecognized opcode reached Execute while strict opcode checking is on.
    #[error("illegal opcode `{name}` at pc {pc}")]
    IllegalOpcode {
        /// Fetch-time program counter of the offending instruction.
        pc: i32,
        /// Mnemonic or numeric code that was not recognized.
        name: String,
    },

    /// The supplied configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A line of assembly text could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based source line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A JSON program or configuration could not be decoded.
    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A program or configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Returns `true` for faults raised while a program was executing.
    ///
    /// Setup faults (configuration, parsing, I/O) happen before any cycle runs.
    pub const fn is_run_fault(&self) -> bool {
        matches!(
            self,
            Self::MemoryOutOfBounds { .. }
                | Self::RunawayProgram { .. }
                | Self::IllegalOpcode { .. }
                | Self::RunAborted
        )
    }
}

/// Result alias used throughout the simulator.
pub type SimResult<T> = Result<T, SimError>;
