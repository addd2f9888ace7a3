// src/output/paths.rs
//! Pure functions for content-store paths. No I/O.

use std::path::{Path, PathBuf};

/// File name for a collection entry: `<sanitized id>.json`.
pub fn entry_filename(id: &str) -> String {
    format!("{}.json", sanitize_filename(id))
}

/// `<content_dir>/<collection>/<id>.json`
pub fn entry_path(content_dir: &Path, collection: &str, id: &str) -> PathBuf {
    content_dir
        .join(sanitize_filename(collection))
        .join(entry_filename(id))
}

/// Sanitizes a string to be safe for use as a filename.
pub fn sanitize_filename(name: &str) -> String {
    let mut safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();

    safe_name = safe_name.trim().trim_matches('.').to_string();

    if safe_name.chars().count() > 100 {
        safe_name = safe_name.chars().take(100).collect();
    }

    if safe_name.is_empty() {
        safe_name = "unnamed".to_string();
    }

    safe_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hello/World"), "Hello_World");
        assert_eq!(sanitize_filename("Test:File*Name"), "Test_File_Name");
        assert_eq!(sanitize_filename("   spaces   "), "spaces");
        assert_eq!(sanitize_filename("...dots..."), "dots");
        assert_eq!(sanitize_filename(""), "unnamed");
    }

    #[test]
    fn test_entry_path() {
        let path = entry_path(Path::new("src/content/strapi"), "strapiPosts", "abc123");
        assert_eq!(path, Path::new("src/content/strapi/strapiPosts/abc123.json"));
        assert_eq!(entry_filename("../../etc"), "_.._etc.json");
    }
}
