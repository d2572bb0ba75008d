pub mod analyzer;
pub mod log;
pub mod template;
