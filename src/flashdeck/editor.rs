use crate::error::{FlashdeckError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(FlashdeckError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Splits an editor command like `code --wait` into program and arguments.
fn split_command(editor: &str) -> (String, Vec<String>) {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_default();
    (program, parts.collect())
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();
    let (program, args) = split_command(&editor);

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| FlashdeckError::Editor(format!("Failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(FlashdeckError::Editor(format!(
            "'{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(FlashdeckError::Io)
}

/// Opens an editor on `initial` and returns the edited text.
pub fn edit_text(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!("flashdeck-{}.md", uuid::Uuid::new_v4()));
    fs::write(&temp_file, initial).map_err(FlashdeckError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_command() {
        assert_eq!(split_command("vim"), ("vim".to_string(), vec![]));
    }

    #[test]
    fn split_command_with_flags() {
        assert_eq!(
            split_command("code --wait -n"),
            (
                "code".to_string(),
                vec!["--wait".to_string(), "-n".to_string()]
            )
        );
    }
}
