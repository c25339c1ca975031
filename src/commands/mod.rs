//! CLI commands

pub mod init;
pub mod show;
pub mod submit;
