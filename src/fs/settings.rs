//! Editor settings persistence.
//!
//! Settings live as JSON in `.slashpad/settings.json` (or a path given on the
//! command line). Every field is optional in the file; missing fields take
//! their defaults, and out-of-range values are replaced with the default and
//! logged.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::dispatch::TableShape;
use crate::tui::widgets::MAX_MENU_ROWS;

/// Directory for slashpad configuration files.
pub const SLASHPAD_DIR: &str = ".slashpad";

/// Settings file name inside [`SLASHPAD_DIR`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default placeholder shown in an empty document.
pub const DEFAULT_PLACEHOLDER: &str = "Start writing or type \"/\" for commands...";

/// Largest table the settings may ask for in either dimension.
pub const MAX_TABLE_DIMENSION: usize = 20;

/// User-tunable editor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorSettings {
    /// Character that opens the command menu.
    pub trigger_char: char,
    /// Most menu rows shown before scrolling.
    pub max_menu_rows: usize,
    /// Rows of an inserted table, header included.
    pub table_rows: usize,
    /// Columns of an inserted table.
    pub table_cols: usize,
    /// Whether inserted tables get a header row.
    pub table_header_row: bool,
    /// Text shown while the document is empty.
    pub placeholder: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            trigger_char: '/',
            max_menu_rows: MAX_MENU_ROWS,
            table_rows: 3,
            table_cols: 3,
            table_header_row: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl EditorSettings {
    /// Replaces invalid values with defaults, logging each fix.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.trigger_char.is_whitespace() || self.trigger_char.is_control() {
            warn!(trigger = ?self.trigger_char, "invalid trigger character, using default");
            self.trigger_char = defaults.trigger_char;
        }
        if self.max_menu_rows == 0 {
            warn!("max_menu_rows must be at least 1, using default");
            self.max_menu_rows = defaults.max_menu_rows;
        }
        if !(1..=MAX_TABLE_DIMENSION).contains(&self.table_rows) {
            warn!(rows = self.table_rows, "table_rows out of range, using default");
            self.table_rows = defaults.table_rows;
        }
        if !(1..=MAX_TABLE_DIMENSION).contains(&self.table_cols) {
            warn!(cols = self.table_cols, "table_cols out of range, using default");
            self.table_cols = defaults.table_cols;
        }
        self
    }

    /// Returns the shape of tables inserted by the table command.
    #[must_use]
    pub const fn table_shape(&self) -> TableShape {
        TableShape {
            rows: self.table_rows,
            cols: self.table_cols,
            header_row: self.table_header_row,
        }
    }
}

/// Loads settings from `path`.
///
/// A missing file yields the defaults. The result is always validated.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<EditorSettings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(EditorSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: EditorSettings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

    debug!(path = %path.display(), "settings loaded");
    Ok(settings.validated())
}
