//! Simulation driver and program loading.
//!
//! Provides the run driver that steps the core to completion and the loaders
//! that build programs from JSON or assembly files.

/// Program loading from JSON and assembly text.
pub mod loader;

/// Run driver with a step cap.
pub mod simulator;

pub use simulator::Simulator;
