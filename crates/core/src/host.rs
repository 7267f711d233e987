use crate::error::EditorError;
use crate::finder::TextRange;

/// エディタ操作の抽象インターフェース
///
/// Everything effectful lives behind this trait so the core logic stays pure
/// and testable without a running editor. A host is any surface that can
/// expose an active document and apply edits to it: a real editor, a file on
/// disk, or an in-memory buffer in tests.
pub trait EditorHost {
    /// アクティブなドキュメントの言語ID
    fn active_language_id(&self) -> Result<String, EditorError>;

    /// 現在の選択テキスト（選択がなければ空文字列）
    fn active_selection_text(&self) -> Result<String, EditorError>;

    /// 現在の選択範囲（選択がなければカーソル位置の空範囲）
    fn active_selection_range(&self) -> Result<TextRange, EditorError>;

    /// ドキュメント全文
    fn full_document_text(&self) -> Result<String, EditorError>;

    /// Opens a fresh line below the selection's line and returns the empty
    /// range at its insertion point. Indentation is the host's concern.
    fn open_line_below_selection(&mut self) -> Result<TextRange, EditorError>;

    /// 単一の範囲をテキストで置換
    fn replace_range(&mut self, range: TextRange, text: &str) -> Result<(), EditorError>;

    /// 範囲のバッチ削除を適用し、適用件数を返す
    fn delete_ranges(&mut self, ranges: &[TextRange]) -> Result<usize, EditorError>;

    /// ユーザーへの通知を表示
    fn notify_user(&mut self, message: &str);
}
