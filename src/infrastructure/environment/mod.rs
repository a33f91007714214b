//! Environment adapters
//!
//! - `ProcessEnvironment`: the real process environment table
//! - `MemoryEnvironment`: an isolated map, used for dry runs and tests

pub mod memory;
pub mod process;

pub use memory::MemoryEnvironment;
pub use process::ProcessEnvironment;
