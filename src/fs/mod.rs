//! File system access: settings and document files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod settings;

pub use settings::{
    DEFAULT_PLACEHOLDER, EditorSettings, SETTINGS_FILE_NAME, SLASHPAD_DIR, load_settings,
};

/// Paths slashpad reads, derived from a base directory.
///
/// Tests root this at a temporary directory; the binary roots it at the
/// current working directory.
///
/// ```
/// use std::path::Path;
/// use slashpad::fs::SlashpadPaths;
///
/// let paths = SlashpadPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.settings_file(), Path::new("/tmp/test/.slashpad/settings.json"));
/// ```
#[derive(Debug, Clone)]
pub struct SlashpadPaths {
    base: PathBuf,
}

impl SlashpadPaths {
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the settings file path (`.slashpad/settings.json`).
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.base.join(SLASHPAD_DIR).join(SETTINGS_FILE_NAME)
    }

    /// Loads settings from the settings file, or defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> Result<EditorSettings> {
        load_settings(&self.settings_file())
    }
}

/// Reads a Markdown document to edit.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))
}
