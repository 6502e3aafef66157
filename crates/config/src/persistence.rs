//! Reading and writing todo-board configuration files.
//!
//! Files may be JSON5 (comments, trailing commas) or plain JSON; both are
//! read with the JSON5 parser. Writing always produces pretty-printed JSON.
//!
//! Lookup order, first existing file wins:
//!
//! 1. `./todo-board.json5`, `./todo-board.json`
//! 2. `<config dir>/todo-board/config.json5`, `<config dir>/todo-board/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["todo-board.json5", "todo-board.json"];

/// Application directory under the platform config directory.
const APP_DIR: &str = "todo-board";

/// File names looked up in [`APP_DIR`].
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Returns every location a config file may live at, in lookup order.
///
/// The user locations are omitted when the platform has no config
/// directory.
#[must_use]
pub fn candidate_paths() -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Finds the first existing configuration file.
///
/// # Examples
///
/// ```no_run
/// use todo_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|path| path.exists())
}

/// Reads and deserializes a JSON5 or JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not deserialize.
///
/// # Examples
///
/// ```no_run
/// use todo_config::Config;
/// use todo_config::persistence::read_config_file;
///
/// # fn main() -> todo_config::Result<()> {
/// let config: Config = read_config_file("todo-board.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] on I/O failure and
/// [`ConfigError::SerializeJson`] if serialization fails.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn reads_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"name": "board", "count": 3}"#).unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.name, "board");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn reads_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // columns on the board
                name: "board",
                count: 3,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/todo-board.json").unwrap_err();
        match err {
            ConfigError::ReadFile { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/todo-board.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let sample = Sample {
            name: "board".to_string(),
            count: 3,
        };

        write_config_file(&path, &sample).unwrap();
        assert!(path.exists());

        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn local_candidates_come_first() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from("todo-board.json5"));
        assert_eq!(paths[1], PathBuf::from("todo-board.json"));
        assert!(paths[2..].iter().all(|p| p.parent().is_some_and(|d| d.ends_with(APP_DIR))));
    }
}
