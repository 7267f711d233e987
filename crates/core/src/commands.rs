use crate::builder::build_log_statement;
use crate::error::EditorError;
use crate::finder::find_log_statements;
use crate::host::EditorHost;
use tracing::info;

/// ログ文挿入コマンド
///
/// Builds a log statement from the active language and selection, then
/// applies it through the host. A non-empty selection gets a self-labelling
/// call on a fresh line below the selection; an empty selection gets a bare
/// call at the cursor. An unsupported language becomes a user notification,
/// not an error; host failures propagate.
pub fn insert_log_statement<H: EditorHost>(host: &mut H) -> Result<(), EditorError> {
    let language_id = host.active_language_id()?;
    let selection = host.active_selection_text()?;

    let statement = match build_log_statement(&language_id, &selection) {
        Ok(statement) => statement,
        Err(EditorError::UnsupportedLanguage(id)) => {
            let message = if id == "plaintext" {
                "Choose a language for the file".to_string()
            } else {
                format!("{id} is not supported")
            };
            host.notify_user(&message);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let target = if selection.is_empty() {
        host.active_selection_range()?
    } else {
        host.open_line_below_selection()?
    };
    host.replace_range(target, &statement)?;
    info!("inserted log statement for {}", language_id);
    Ok(())
}

/// 全ログ文削除コマンド
///
/// Finds every log statement in the active document and deletes them in one
/// batch edit, then reports the applied count to the user.
pub fn delete_all_log_statements<H: EditorHost>(host: &mut H) -> Result<(), EditorError> {
    let language_id = host.active_language_id()?;
    let text = host.full_document_text()?;

    let ranges = match find_log_statements(&text, &language_id) {
        Ok(ranges) => ranges,
        Err(EditorError::UnsupportedLanguage(id)) => {
            host.notify_user(&format!("{id} is not supported"));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let deleted = host.delete_ranges(&ranges)?;
    info!("deleted {} log statements for {}", deleted, language_id);
    host.notify_user(&format!("{deleted} logs deleted"));
    Ok(())
}
