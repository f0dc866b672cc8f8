//! Marker file search.
//!
//! Walks a folder recursively and collects every file whose trailing path
//! segments equal the configured marker suffix (for WordPress,
//! `wp-includes/version.php`). Results are returned sorted by path so the
//! report order does not depend on directory iteration order.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{CheckError, Result};

/// Trailing path segments that identify a marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    segments: Vec<OsString>,
}

impl MarkerPattern {
    /// Build a pattern from a suffix such as `/wp-includes/version.php`.
    ///
    /// Both `/` and `\` separate segments; empty segments are ignored.
    pub fn new(suffix: &str) -> Self {
        let segments = suffix
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .map(OsString::from)
            .collect();
        Self { segments }
    }

    /// Number of path segments in the suffix.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Check whether `path` ends with this pattern's segments.
    pub fn matches(&self, path: &Path) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        let mut components = path.components().rev();
        self.segments.iter().rev().all(|segment| {
            matches!(components.next(), Some(Component::Normal(name)) if name == segment.as_os_str())
        })
    }

    /// Installation root of a matching marker file (the suffix stripped off).
    pub fn installation_root<'a>(&self, marker_file: &'a Path) -> Option<&'a Path> {
        marker_file.ancestors().nth(self.depth())
    }
}

/// Find every marker file under `root`, sorted in ascending path order.
///
/// Fails with [`CheckError::Filesystem`] when `root` is missing, unreadable
/// or not a directory. Unreadable subdirectories are logged and skipped.
/// With `follow_links` set, symlink cycles are detected and skipped as well.
pub fn find_marker_files(
    root: &Path,
    pattern: &MarkerPattern,
    follow_links: bool,
) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(root).map_err(|e| filesystem_error(root, e))?;

    let metadata = fs::metadata(&root).map_err(|e| filesystem_error(&root, e))?;
    if !metadata.is_dir() {
        return Err(filesystem_error(&root, "not a directory"));
    }
    fs::read_dir(&root).map_err(|e| filesystem_error(&root, e))?;

    debug!("Scanning {} for marker files", root.display());

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).follow_links(follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if pattern.matches(entry.path()) {
            debug!("Found marker file {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    found.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(found)
}

fn filesystem_error(path: &Path, err: impl Display) -> CheckError {
    CheckError::Filesystem {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn wordpress() -> MarkerPattern {
        MarkerPattern::new("/wp-includes/version.php")
    }

    fn install(root: &Path, site: &str) -> PathBuf {
        let includes = root.join(site).join("wp-includes");
        fs::create_dir_all(&includes).unwrap();
        let marker = includes.join("version.php");
        fs::write(&marker, "<?php\n$wp_version = '6.4';\n").unwrap();
        marker
    }

    #[test]
    fn pattern_splits_segments() {
        assert_eq!(wordpress().depth(), 2);
        assert_eq!(MarkerPattern::new("VERSION").depth(), 1);
        assert_eq!(MarkerPattern::new("\\lib\\version.php").depth(), 2);
    }

    #[test]
    fn pattern_matches_trailing_segments_only() {
        let pattern = wordpress();
        assert!(pattern.matches(Path::new("/srv/site/wp-includes/version.php")));
        assert!(pattern.matches(Path::new("wp-includes/version.php")));
        assert!(!pattern.matches(Path::new("/srv/site/wp-includes/version.php.bak")));
        assert!(!pattern.matches(Path::new("/srv/site/old-wp-includes/version.php")));
        assert!(!pattern.matches(Path::new("/srv/site/version.php")));
        assert!(!pattern.matches(Path::new("version.php")));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let pattern = MarkerPattern::new("/");
        assert!(!pattern.matches(Path::new("/srv/site/anything")));
    }

    #[test]
    fn installation_root_strips_suffix() {
        let pattern = wordpress();
        let marker = Path::new("/srv/www/blog/wp-includes/version.php");
        assert_eq!(
            pattern.installation_root(marker),
            Some(Path::new("/srv/www/blog"))
        );
    }

    #[test]
    fn finds_nested_installations_sorted() {
        let temp = TempDir::new().unwrap();
        let b = install(temp.path(), "b-site");
        let a = install(temp.path(), "a-site");
        let nested = install(temp.path(), "a-site/sub/blog");
        fs::write(temp.path().join("a-site").join("version.php"), "").unwrap();

        let found = find_marker_files(temp.path(), &wordpress(), false).unwrap();

        assert_eq!(found, vec![nested, a, b]);
    }

    #[test]
    fn root_itself_can_be_an_installation() {
        let temp = TempDir::new().unwrap();
        let includes = temp.path().join("wp-includes");
        fs::create_dir_all(&includes).unwrap();
        fs::write(includes.join("version.php"), "").unwrap();

        let found = find_marker_files(temp.path(), &wordpress(), false).unwrap();

        assert_eq!(found, vec![includes.join("version.php")]);
    }

    #[test]
    fn sort_is_lexical_by_path_string() {
        let temp = TempDir::new().unwrap();
        let dashed = install(temp.path(), "site-b");
        let nested = install(temp.path(), "site/b");

        let found = find_marker_files(temp.path(), &wordpress(), false).unwrap();

        // '-' sorts before '/' byte-wise
        assert_eq!(found, vec![dashed, nested]);
    }

    #[test]
    fn empty_tree_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("wp-content/plugins")).unwrap();

        let found = find_marker_files(temp.path(), &wordpress(), false).unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn directory_named_like_marker_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("site/wp-includes/version.php")).unwrap();

        let found = find_marker_files(temp.path(), &wordpress(), false).unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn missing_root_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = find_marker_files(&missing, &wordpress(), false).unwrap_err();

        assert!(matches!(err, CheckError::Filesystem { .. }));
    }

    #[test]
    fn file_root_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = find_marker_files(&file, &wordpress(), false).unwrap_err();

        assert!(err.to_string().contains("not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycle_is_skipped_when_following_links() {
        let temp = TempDir::new().unwrap();
        let marker = install(temp.path(), "site");
        std::os::unix::fs::symlink(temp.path(), temp.path().join("site").join("loop")).unwrap();

        let found = find_marker_files(temp.path(), &wordpress(), true).unwrap();

        assert_eq!(found, vec![marker]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed_by_default() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        install(outside.path(), "site");
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

        assert!(find_marker_files(temp.path(), &wordpress(), false)
            .unwrap()
            .is_empty());
        assert_eq!(
            find_marker_files(temp.path(), &wordpress(), true)
                .unwrap()
                .len(),
            1
        );
    }
}
