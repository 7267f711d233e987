use thiserror::Error;

/// エディタ操作のエラー
///
/// All core errors are reported as values; the host integration decides
/// which ones become user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The language id is not in the pattern table (or is the generic
    /// "no language" marker).
    #[error("{0} is not supported")]
    UnsupportedLanguage(String),

    /// No document or selection context is available. Raised by the host
    /// boundary, never by the pure core functions.
    #[error("no document is open")]
    NoActiveDocument,
}
