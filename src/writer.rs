//! Persistence of extracted and merged lists.
//!
//! File layout under the output directory:
//!
//! - `<source>.txt`: one symbol per line, ascending
//! - `combined.txt`: the merged list, one symbol per line
//! - `tickers.json`: the merged list as a JSON array, 2-space indent
//!
//! Text files have no trailing newline.
//!
//! The loaders read these files back. Text lists take one symbol per line,
//! ignoring blank lines and `#` comments. JSON lists are arrays of strings.
//! Entries are trimmed and uppercased, then kept only if they qualify as a
//! [`Symbol`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::merge::{join_lines, MergedList};
use crate::symbol::{Symbol, SymbolPolicy, SymbolSet};

/// File name of the merged text list.
pub const COMBINED_FILE: &str = "combined.txt";

/// File name of the merged JSON list.
pub const JSON_FILE: &str = "tickers.json";

/// Files tried by [`load_from_dir`], in order.
pub const LOOKUP_ORDER: [&str; 3] = [COMBINED_FILE, JSON_FILE, "sp500.txt"];

/// Writes lists into one output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Use `dir`, creating it (and parents) if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one source's symbols to `file_name`.
    pub fn write_source(&self, file_name: &str, symbols: &SymbolSet) -> Result<PathBuf> {
        self.write_text(file_name, &join_lines(symbols.iter()))
    }

    /// Write the merged list to `combined.txt`.
    pub fn write_combined(&self, merged: &MergedList) -> Result<PathBuf> {
        self.write_text(COMBINED_FILE, &merged.to_lines())
    }

    /// Write the merged list to `tickers.json`.
    pub fn write_json(&self, merged: &MergedList) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(merged)?;
        self.write_text(JSON_FILE, &json)
    }

    fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
        Ok(path)
    }
}

/// Read a saved list.
///
/// `.txt` files are read as lines and `.json` files as an array of strings.
/// Any other extension is tried as JSON first, then as lines.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let symbols = rs_index_tickers::load_symbols(Path::new("indices/combined.txt"))?;
/// println!("{} tickers", symbols.len());
/// # Ok::<(), rs_index_tickers::Error>(())
/// ```
pub fn load_symbols(path: &Path) -> Result<SymbolSet> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let entries: Vec<String> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&text)?,
        Some("txt") => list_lines(&text),
        _ => serde_json::from_str(&text).unwrap_or_else(|_| list_lines(&text)),
    };

    let policy = SymbolPolicy::default();
    let symbols: SymbolSet = entries
        .iter()
        .filter_map(|entry| Symbol::parse(&entry.trim().to_ascii_uppercase(), &policy))
        .collect();
    info!(path = %path.display(), count = symbols.len(), "loaded saved list");
    Ok(symbols)
}

/// Load the first list present in `dir`, trying [`LOOKUP_ORDER`].
pub fn load_from_dir(dir: &Path) -> Result<SymbolSet> {
    for name in LOOKUP_ORDER {
        let path = dir.join(name);
        if path.is_file() {
            debug!(path = %path.display(), "found saved list");
            return load_symbols(&path);
        }
    }
    Err(Error::NoSavedList {
        dir: dir.to_path_buf(),
    })
}

/// Load `file` when it exists, otherwise fall back to [`load_from_dir`].
pub fn load_file_or_dir(file: Option<&Path>, dir: &Path) -> Result<SymbolSet> {
    if let Some(path) = file {
        if path.is_file() {
            return load_symbols(path);
        }
        info!(path = %path.display(), "list file missing, searching output directory");
    }
    load_from_dir(dir)
}

fn list_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
