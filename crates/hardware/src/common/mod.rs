//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register count, default memory size, and the default step cap.
//! 2. **Error Handling:** The `SimError` type and `SimResult` alias.
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for run and setup faults.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DEFAULT_MAX_STEPS, DEFAULT_MEMORY_WORDS, NUM_REGS, REG_ZERO};
pub use error::{SimError, SimResult};
pub use reg::RegisterFile;
