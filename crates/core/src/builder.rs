use crate::error::EditorError;
use crate::language::Language;
use crate::patterns::LogPattern;

/// 挿入するログ文を組み立てる
///
/// With an empty selection this produces a bare `<statement>()` call. With a
/// selected expression it produces a self-describing two-argument call,
/// `<statement>("<expr>: ", <expr>)`, so the debug output carries its own
/// label.
///
/// The selection is embedded verbatim: quotes and unbalanced parens inside
/// it are not escaped (see builder tests).
pub fn build_log_statement(language_id: &str, selection: &str) -> Result<String, EditorError> {
    let language = Language::from_language_id(language_id)
        .ok_or_else(|| EditorError::UnsupportedLanguage(language_id.to_string()))?;
    let statement = LogPattern::for_language(language).statement;

    if selection.is_empty() {
        Ok(format!("{statement}()"))
    } else {
        Ok(format!("{statement}(\"{selection}: \", {selection})"))
    }
}
