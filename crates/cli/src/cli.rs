use crate::editor::FileEditor;
use anyhow::Result;
use clap::{Parser, Subcommand};
use log_utils_core::{
    delete_all_log_statements, find_log_statements, insert_log_statement, EditorHost,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logutils")]
#[command(about = "Insert and delete debug log statements in source files")]
#[command(version)]
pub struct Cli {
    /// Language id (default: detected from the file extension)
    #[arg(short = 'l', long = "language", global = true)]
    pub language: Option<String>,

    /// Print the resulting document to stdout instead of writing the file
    #[arg(short = 'd', long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert a log statement [aliases: i]
    #[command(visible_alias = "i")]
    Insert {
        /// Source file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Expression to log; its first occurrence in the file becomes the
        /// active selection and the statement lands on a fresh line below it
        #[arg(short = 's', long = "selection")]
        selection: Option<String>,
    },

    /// Delete all log statements [aliases: del]
    #[command(visible_alias = "del")]
    DeleteAll {
        /// Source file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// List the ranges that would be deleted as JSON, without editing
        #[arg(long = "json")]
        json: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Insert { file, selection } => {
                let mut editor = FileEditor::open(&file, self.language, self.dry_run)?;
                editor.set_selection(selection);
                insert_log_statement(&mut editor)?;
                editor.finish()
            }
            Commands::DeleteAll { file, json } => {
                let mut editor = FileEditor::open(&file, self.language, self.dry_run)?;
                if json {
                    let ranges = find_log_statements(
                        &editor.full_document_text()?,
                        &editor.active_language_id()?,
                    )?;
                    println!("{}", serde_json::to_string_pretty(&ranges)?);
                    return Ok(());
                }
                delete_all_log_statements(&mut editor)?;
                editor.finish()
            }
        }
    }
}
