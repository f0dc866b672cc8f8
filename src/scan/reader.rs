//! Installed version extraction.
//!
//! A marker file is treated strictly as data: the version is pulled out of
//! its `$name = 'value';` assignment with a regular expression, never by
//! evaluating the file. Comments and unrelated string literals are matched
//! as whole tokens so an assignment inside them is never picked up.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{CheckError, Result};

/// Reads the installed version from marker files.
#[derive(Debug, Clone)]
pub struct VersionReader {
    variable: String,
    tokens: Regex,
}

impl VersionReader {
    /// Create a reader for the given variable name (without the leading `$`).
    pub fn new(variable: &str) -> Result<Self> {
        // Leftmost match wins, so a comment or string literal swallows any
        // assignment-looking text inside it.
        let tokens = Regex::new(&format!(
            concat!(
                r"(?s)/\*.*?\*/",
                r"|//[^\n]*",
                r"|#[^\n]*",
                r#"|\${}\s*=\s*(?:'([^']*)'|"([^"]*)")"#,
                r"|'(?:[^'\\]|\\.)*'",
                r#"|"(?:[^"\\]|\\.)*""#,
            ),
            regex::escape(variable)
        ))
        .map_err(|e| CheckError::InvalidConfig {
            message: format!("bad version variable '{}': {}", variable, e),
        })?;

        Ok(Self {
            variable: variable.to_string(),
            tokens,
        })
    }

    /// Name of the variable this reader looks for.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Extract the version from marker file contents.
    ///
    /// The last assignment outside comments wins when the variable is
    /// assigned more than once. An empty value is not a version.
    pub fn extract(&self, contents: &str) -> Option<String> {
        self.tokens
            .captures_iter(contents)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .last()
            .map(|value| value.as_str())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Read the installed version from a marker file.
    ///
    /// Returns an empty string when the file cannot be read or does not
    /// assign the variable; the problem is logged and the run continues.
    pub fn read_version(&self, marker_file: &Path) -> String {
        let bytes = match fs::read(marker_file) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Cannot read {}: {}", marker_file.display(), err);
                return String::new();
            }
        };

        match self.extract(&String::from_utf8_lossy(&bytes)) {
            Some(version) => {
                debug!("{} reports {}", marker_file.display(), version);
                version
            }
            None => {
                warn!(
                    "No ${} assignment found in {}",
                    self.variable,
                    marker_file.display()
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VERSION_PHP: &str = r#"<?php
/**
 * WordPress Version
 *
 * Contains version information for the current WordPress release.
 *
 * @package WordPress
 * @since 1.2.0
 */

/**
 * The WordPress version string.
 *
 * @global string $wp_version
 */
$wp_version = '6.4.2';

/**
 * Holds the WordPress DB revision, increments when changes are made to the WordPress DB schema.
 *
 * @global int $wp_db_version
 */
$wp_db_version = 56657;

$tinymce_version = '49110-20201110';
$required_php_version = '7.0.0';
$required_mysql_version = '5.0';
"#;

    fn reader() -> VersionReader {
        VersionReader::new("wp_version").unwrap()
    }

    #[test]
    fn extracts_version_from_real_marker() {
        assert_eq!(reader().extract(VERSION_PHP), Some("6.4.2".to_string()));
    }

    #[test]
    fn value_is_returned_verbatim() {
        let r = reader();
        assert_eq!(
            r.extract("$wp_version = \"6.5-RC1-57800\";"),
            Some("6.5-RC1-57800".to_string())
        );
        assert_eq!(r.extract("$wp_version='6.4 ';"), Some("6.4 ".to_string()));
    }

    #[test]
    fn similar_names_do_not_match() {
        let r = reader();
        assert_eq!(r.extract("$wp_version_x = '1.0';"), None);
        assert_eq!(r.extract("$my_wp_version = '1.0';"), None);
        assert_eq!(r.extract("$wp_db_version = 56657;"), None);
    }

    #[test]
    fn docblock_mentions_are_ignored() {
        assert_eq!(reader().extract("@global string $wp_version\n"), None);
    }

    #[test]
    fn last_assignment_wins() {
        let contents = "$wp_version = '6.3';\n$wp_version = '6.4';\n";
        assert_eq!(reader().extract(contents), Some("6.4".to_string()));
    }

    #[test]
    fn commented_out_assignments_are_ignored() {
        let r = reader();
        assert_eq!(
            r.extract("<?php\n$wp_version = '6.4';\n// $wp_version = '1.0';\n"),
            Some("6.4".to_string())
        );
        assert_eq!(
            r.extract("$wp_version = '6.4';\n# $wp_version = '1.0';\n"),
            Some("6.4".to_string())
        );
        assert_eq!(
            r.extract("$wp_version = '6.4';\n/*\n$wp_version = '1.0';\n*/\n"),
            Some("6.4".to_string())
        );
    }

    #[test]
    fn assignments_inside_strings_are_ignored() {
        let contents = "$wp_version = '6.4';\n$note = \"see $wp_version = '1.0' // old\";\n";
        assert_eq!(reader().extract(contents), Some("6.4".to_string()));
    }

    #[test]
    fn empty_value_is_not_a_version() {
        assert_eq!(reader().extract("$wp_version = '';"), None);
    }

    #[test]
    fn other_variable_names_are_supported() {
        let r = VersionReader::new("cms.version").unwrap();
        assert_eq!(r.variable(), "cms.version");
        assert_eq!(r.extract("$cms.version = '2.0';"), Some("2.0".to_string()));
        assert_eq!(r.extract("$cmsXversion = '2.0';"), None);
    }

    #[test]
    fn read_version_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.php");
        fs::write(&path, VERSION_PHP).unwrap();

        assert_eq!(reader().read_version(&path), "6.4.2");
    }

    #[test]
    fn missing_assignment_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.php");
        fs::write(&path, "<?php\n// nothing here\n").unwrap();

        assert_eq!(reader().read_version(&path), "");
    }

    #[test]
    fn unreadable_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(reader().read_version(&temp.path().join("missing.php")), "");
    }

    #[test]
    fn invalid_utf8_does_not_abort() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.php");
        let mut bytes = b"<?php\n// \xff\xfe\n".to_vec();
        bytes.extend_from_slice(b"$wp_version = '6.1';\n");
        fs::write(&path, bytes).unwrap();

        assert_eq!(reader().read_version(&path), "6.1");
    }

    #[test]
    fn reads_are_independent() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.php");
        let second = temp.path().join("second.php");
        fs::write(&first, "$wp_version = '6.4';").unwrap();
        fs::write(&second, "<?php\n").unwrap();

        let r = reader();
        assert_eq!(r.read_version(&first), "6.4");
        assert_eq!(r.read_version(&second), "");
    }
}
