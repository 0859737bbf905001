pub mod config;
pub mod init;
pub mod login;
pub mod punch;
pub mod session;
pub mod status;
