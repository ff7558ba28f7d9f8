//! Utility modules for common functionality
//!
//! This module provides the logger, progress reporting and small helpers
//! shared by the splitter, the configuration layer and the commands.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod format_utils;
pub(crate) mod string_utils;
