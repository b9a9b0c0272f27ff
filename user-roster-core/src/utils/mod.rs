//! 工具模块

pub mod log_sanitizer;

pub use log_sanitizer::truncate_for_log;
