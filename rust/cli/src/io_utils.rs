//! File and stdin helpers shared by the commands.

use std::io::BufRead;
use std::path::Path;

/// Read one trimmed line, or `None` on EOF or a read error.
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &str) -> Result<String, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    Ok(strip_utf8_bom(content))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| format!("{}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(mut s: String) -> String {
    if s.starts_with('\u{feff}') {
        s.drain(..'\u{feff}'.len_utf8());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stdin_line_is_trimmed() {
        let mut input = Cursor::new(" hit \nstick\n");
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("hit"));
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("stick"));
        assert_eq!(read_stdin_line(&mut input), None);
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(strip_utf8_bom("\u{feff}{}".to_string()), "{}");
        assert_eq!(strip_utf8_bom("{}".to_string()), "{}");
    }

    #[test]
    fn read_text_reports_missing_file() {
        let e = read_text("target/definitely_missing_file.jsonl").unwrap_err();
        assert!(e.contains("definitely_missing_file"));
    }

    #[test]
    fn ensure_parent_dir_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/log.jsonl");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }
}
