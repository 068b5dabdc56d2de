//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;
use jwalk::WalkDir;

/// Is this a rendered page we operate on?
pub fn is_page_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html" | "htm")
    )
}

/// Collect page files based on CLI paths
///
/// Directories are walked recursively; explicit files must be HTML.
/// A single `-` reads paths from stdin, one per line.
pub fn collect_page_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        anyhow::bail!("no paths given (pass files, directories, or `-` for stdin)");
    }

    let mut all_files = Vec::new();
    for path in &paths {
        if path.is_file() {
            if is_page_file(path) {
                all_files.push(path.clone());
            } else {
                anyhow::bail!("Not an HTML page: {}", path.display());
            }
        } else if path.is_dir() {
            all_files.extend(collect_html_files(path));
        } else {
            anyhow::bail!("Path not found: {}", path.display());
        }
    }

    all_files.sort();
    Ok(all_files)
}

/// Walk a directory for HTML files.
fn collect_html_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_page_file(p))
        .collect()
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_page_file() {
        assert!(is_page_file(Path::new("index.html")));
        assert!(is_page_file(Path::new("a/b/detail.htm")));
        assert!(!is_page_file(Path::new("style.css")));
        assert!(!is_page_file(Path::new("README")));
    }

    #[test]
    fn test_collect_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<p>a</p>").unwrap();
        fs::write(dir.path().join("b.css"), "p{}").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.htm"), "<p>c</p>").unwrap();

        let files = collect_page_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_page_file(f)));
    }

    #[test]
    fn test_non_html_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let css = dir.path().join("style.css");
        fs::write(&css, "p{}").unwrap();
        assert!(collect_page_files(&[css]).is_err());
    }

    #[test]
    fn test_missing_path_rejected() {
        assert!(collect_page_files(&[PathBuf::from("/no/such/path.html")]).is_err());
    }
}
