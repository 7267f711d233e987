use anyhow::{Context, Result};
use colored::Colorize;
use log_utils_core::{remove_ranges, EditorError, EditorHost, Language, TextRange};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// ディスク上のファイルをアクティブドキュメントとして扱うエディタホスト
///
/// The "active selection" is the first occurrence of the configured
/// selection text in the document; without one the cursor sits at the end of
/// the document. Edits accumulate in memory until [`FileEditor::finish`]
/// writes them back (or prints them in dry-run mode).
#[derive(Debug)]
pub struct FileEditor {
    path: PathBuf,
    text: String,
    language_id: String,
    selection: Option<String>,
    dry_run: bool,
}

impl FileEditor {
    /// ファイルを開いてエディタホストを作成
    ///
    /// The language comes from the explicit override when given, otherwise
    /// from the file extension. An unknown extension behaves like an editor
    /// buffer without a language, i.e. `plaintext`.
    pub fn open(path: &Path, language: Option<String>, dry_run: bool) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let language_id = language.unwrap_or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(Language::from_extension)
                .map_or_else(|| "plaintext".to_string(), |l| l.language_id().to_string())
        });
        debug!("opened {} as {}", path.display(), language_id);
        Ok(Self {
            path: path.to_path_buf(),
            text,
            language_id,
            selection: None,
            dry_run,
        })
    }

    pub fn set_selection(&mut self, selection: Option<String>) {
        self.selection = selection.filter(|s| !s.is_empty());
    }

    /// 編集結果をファイルへ書き戻す（dry-runなら標準出力へ）
    pub fn finish(self) -> Result<()> {
        if self.dry_run {
            print!("{}", self.text);
            return Ok(());
        }
        fs::write(&self.path, &self.text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn selection_start(&self) -> usize {
        self.selection
            .as_deref()
            .and_then(|s| self.text.find(s))
            .unwrap_or(self.text.len())
    }
}

impl EditorHost for FileEditor {
    fn active_language_id(&self) -> Result<String, EditorError> {
        Ok(self.language_id.clone())
    }

    fn active_selection_text(&self) -> Result<String, EditorError> {
        Ok(self.selection.clone().unwrap_or_default())
    }

    fn active_selection_range(&self) -> Result<TextRange, EditorError> {
        let start = self.selection_start();
        let len = self.selection.as_deref().map_or(0, str::len);
        Ok(TextRange::new(start, (start + len).min(self.text.len())))
    }

    fn full_document_text(&self) -> Result<String, EditorError> {
        Ok(self.text.clone())
    }

    fn open_line_below_selection(&mut self) -> Result<TextRange, EditorError> {
        let selection_start = self.selection_start();
        let line_start = self.text[..selection_start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.text[selection_start..]
            .find('\n')
            .map_or(self.text.len(), |i| selection_start + i);

        // the fresh line inherits the selection line's indentation
        let indent: String = self.text[line_start..line_end]
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        let opened = format!("\n{indent}");
        self.text.insert_str(line_end, &opened);

        let point = line_end + opened.len();
        Ok(TextRange::new(point, point))
    }

    fn replace_range(&mut self, range: TextRange, text: &str) -> Result<(), EditorError> {
        self.text.replace_range(range.start..range.end, text);
        Ok(())
    }

    fn delete_ranges(&mut self, ranges: &[TextRange]) -> Result<usize, EditorError> {
        self.text = remove_ranges(&self.text, ranges);
        Ok(ranges.len())
    }

    fn notify_user(&mut self, message: &str) {
        println!("{}", message.cyan());
    }
}
