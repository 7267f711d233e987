//! Log Statement Utils Core Library
//!
//! This crate provides the core logic for inserting and removing debug log
//! statements in source text, independent of any editor.

pub mod builder;
pub mod commands;
pub mod error;
pub mod finder;
pub mod host;
pub mod language;
pub mod patterns;

// Re-export main types
pub use builder::build_log_statement;
pub use commands::{delete_all_log_statements, insert_log_statement};
pub use error::EditorError;
pub use finder::{find_log_statements, remove_ranges, TextRange};
pub use host::EditorHost;
pub use language::Language;
pub use patterns::LogPattern;
