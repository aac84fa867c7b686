//! Filesystem plumbing for hosts that keep task files sorted on disk.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid tasks directory: {0}")]
    InvalidTasksDir(String),
}

/// Read a task file and return its content.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Sort a file in place. The file is rewritten only when the sorted text
/// differs from what is on disk, so a no-op sort causes no filesystem churn.
/// Returns whether the file changed.
pub fn sort_file(path: &Path) -> Result<bool, IoError> {
    let content = read_file(path)?;
    let sorted = crate::sort(&content);
    if sorted == content {
        return Ok(false);
    }
    fs::write(path, sorted).map_err(IoError::Io)?;
    Ok(true)
}

/// Like [`sort_file`] but never writes; returns whether a write would happen.
pub fn check_file(path: &Path) -> Result<bool, IoError> {
    let content = read_file(path)?;
    Ok(crate::sort(&content) != content)
}

/// Recursively collect the markdown files under a tasks directory, sorted by
/// path for a deterministic sweep order.
pub fn scan_task_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidTasksDir(
            "tasks directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn sort_file_rewrites_an_unsorted_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tasks.md", "- [x] a\n- [ ] b\n");

        let changed = sort_file(&path).unwrap();

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "- [ ] b\n- [x] a\n");
    }

    #[test]
    fn sort_file_leaves_a_sorted_file_untouched() {
        let dir = TempDir::new().unwrap();
        let content = "- [ ] a\n- [x] b\n";
        let path = write_file(&dir, "tasks.md", content);

        let changed = sort_file(&path).unwrap();

        assert!(!changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn check_file_reports_without_writing() {
        let dir = TempDir::new().unwrap();
        let content = "- [x] a\n- [ ] b\n";
        let path = write_file(&dir, "tasks.md", content);

        assert!(check_file(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn read_file_reports_missing_paths() {
        let missing = PathBuf::from("/this/path/does/not/exist.md");
        assert!(matches!(read_file(&missing), Err(IoError::NotFound(_))));
    }

    #[test]
    fn scan_finds_only_markdown_files_recursively() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.md", "- [ ] a\n");
        write_file(&dir, "skip.txt", "not markdown\n");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_file(&dir, "nested/b.md", "- [ ] b\n");

        let files = scan_task_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("a.md")));
        assert!(files.iter().any(|f| f.ends_with("nested/b.md")));
    }

    #[test]
    fn scan_rejects_a_missing_directory() {
        let missing = Path::new("/this/path/does/not/exist");
        assert!(matches!(
            scan_task_files(missing),
            Err(IoError::InvalidTasksDir(_))
        ));
    }
}
