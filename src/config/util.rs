//! Configuration discovery and URL helpers.

use std::path::{Path, PathBuf};

/// Path component of a URL without surrounding slashes.
///
/// Returns `None` if the URL does not parse.
///
/// ```ignore
/// extract_url_path("https://me.github.io/blog/")    -> Some("blog")
/// extract_url_path("https://example.com")           -> Some("")
/// extract_url_path("https://example.com:8080/a/b")  -> Some("a/b")
/// extract_url_path("invalid")                       -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find `config_name` in the current directory or the nearest ancestor.
///
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/lectern.toml    ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://me.github.io/blog/"),
            Some("blog".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.github.io/a/b/c"),
            Some("a/b/c".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com/path?query=1#frag"),
            Some("path".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("lectern.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("lectern.toml")).unwrap();
        assert_eq!(found, dir.path().join("lectern.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lectern.toml")).unwrap();
        assert!(find_config_from(dir.path(), Path::new("lectern.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(&path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
