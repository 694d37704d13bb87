//! Directory ingestion.
//!
//! Scans one directory for `*.svg` files, checks that each is well formed,
//! classifies it by file name, and parses the matching ones into a
//! [`DiagramSet`]. Files are visited in
//! sorted path order, so when two files classify to the same level the
//! outcome does not depend on the platform's directory order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use c4stack_core::{level::Level, navigation::NavigationMode, record::DiagramSet};
use c4stack_parser::check_well_formed;

use crate::error::StackError;

/// Loads every classifiable diagram in `dir`.
///
/// Every `*.svg` file must be well formed, including those that match no
/// level; the unclassifiable ones are then skipped. Non-SVG files are
/// ignored and subdirectories are not searched.
///
/// # Errors
///
/// Returns [`StackError::Io`] if the directory or an SVG file cannot be
/// read, [`StackError::Parse`] for the first file that is not well formed or
/// fails to parse, and [`StackError::NoDiagrams`] if no file matched any
/// level.
pub fn load_directory(dir: &Path, mode: NavigationMode) -> Result<DiagramSet, StackError> {
    let files = svg_files(dir)?;
    info!(dir:? = dir, candidates = files.len(); "Scanning for diagrams");

    let mut set = DiagramSet::new();
    for path in files {
        let source = fs::read_to_string(&path)?;
        if let Err(diag) = check_well_formed(&source) {
            return Err(StackError::new_parse_error(diag.into(), source, Some(path)));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let Some(level) = Level::classify(&file_name) else {
            debug!(path:?; "Skipping file that matches no level");
            continue;
        };

        let record = c4stack_parser::parse(&source, level, mode)
            .map_err(|err| StackError::new_parse_error(err, source, Some(path.clone())))?;

        info!(level:?, path:?; "Loaded diagram");
        if set.insert(record).is_some() {
            warn!(level:?, path:?; "Replaced an earlier diagram for the same level");
        }
    }

    if set.is_empty() {
        return Err(StackError::NoDiagrams(dir.to_path_buf()));
    }

    info!(levels = set.len(); "Diagrams loaded");
    Ok(set)
}

/// Lists the regular files in `dir` with an `svg` extension in any case,
/// sorted by path.
fn svg_files(dir: &Path) -> Result<Vec<PathBuf>, StackError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
