//! CLI command implementations.

pub mod exec;
pub mod init;
pub mod profiles;
pub mod show;
