//! CLI command implementations.

pub mod check;
pub mod endpoints;
pub mod export;
pub mod init;
pub mod show;
