//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the three stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Retrieves the instruction at the PC from the program.
//! 2. **Decode:** Derives control signals and holds issue on a load-use hazard.
//! 3. **Execute:** Performs ALU operations, memory access, and resolves branch targets.
//!
//! Within a cycle the stages run back to front (Execute, Decode, Fetch), so an
//! instruction advances by at most one stage per cycle.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
