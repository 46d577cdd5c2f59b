//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage the core sits on: flat main memory and
//! the access contract the cache uses to reach it.

/// Flat word-addressed main memory.
pub mod memory;

/// Main memory access trait.
pub mod traits;

pub use memory::Memory;
pub use traits::WordMemory;
