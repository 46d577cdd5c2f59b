//! Execution units and functional components.
//!
//! This module contains the integer ALU used by Execute and the data cache
//! that fronts main memory.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Direct-mapped write-through data cache.
pub mod cache;
