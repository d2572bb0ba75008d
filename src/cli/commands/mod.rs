pub mod add;
pub mod config;
pub mod copy;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
pub mod template;
