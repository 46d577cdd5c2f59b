//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the three-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Detection of load-use data hazards.
//! 2. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 3. **Signals:** Control signals generated during instruction decoding.
//! 4. **Stages:** Implementation of Fetch, Decode and Execute.

/// Pipeline hazard detection logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute).
pub mod stages;
