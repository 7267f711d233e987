pub mod cli;
pub mod editor;

pub use cli::Cli;
pub use editor::FileEditor;
