use crate::error::EditorError;
use crate::language::Language;
use crate::patterns::LogPattern;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// ドキュメント内のテキスト範囲（バイトオフセット）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// ドキュメント内の全ログ文の範囲を検出
///
/// Scans `text` left to right with the language's detection pattern and
/// returns one range per match, covering the entire matched substring.
/// Ranges come back in strictly increasing start order and never overlap,
/// since each scan step resumes past the previous match. Zero-width matches
/// are dropped so a degenerate pattern cannot loop forever.
///
/// An empty document or a document without matches yields an empty vec,
/// not an error. The scan is a pure function of its inputs.
pub fn find_log_statements(text: &str, language_id: &str) -> Result<Vec<TextRange>, EditorError> {
    let language = Language::from_language_id(language_id)
        .ok_or_else(|| EditorError::UnsupportedLanguage(language_id.to_string()))?;
    let pattern = LogPattern::for_language(language);

    let ranges: Vec<TextRange> = pattern
        .regex
        .find_iter(text)
        .filter(|m| m.end() > m.start())
        .map(|m| TextRange::new(m.start(), m.end()))
        .collect();

    debug!("found {} log statements for {}", ranges.len(), language_id);
    Ok(ranges)
}

/// 範囲のバッチ削除を適用したテキストを返す
///
/// `ranges` must be non-overlapping, as produced by [`find_log_statements`].
pub fn remove_ranges(text: &str, ranges: &[TextRange]) -> String {
    let mut sorted: Vec<TextRange> = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in sorted {
        if range.start > cursor {
            result.push_str(&text[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    result.push_str(&text[cursor..]);
    result
}
