pub mod add;
pub mod config;
pub mod detail;
pub mod init;
pub mod pivot;
