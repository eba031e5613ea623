//! # File I/O
//!
//! The only module that touches the filesystem.
//!
//! - **Atomic writes**: write to `<name>.tmp`, sync, rename over the target
//! - **Version validation**: documents from a newer schema are refused
//!
//! ## Example
//!
//! ```rust,no_run
//! use plan_core::file_io::{load_document, save_document};
//! use plan_core::document::PlanDocument;
//! use plan_core::plan::{Plan, Terrain};
//! use std::path::Path;
//!
//! let plan = Plan {
//!     terrain: Terrain::new(15.0, 25.0),
//!     rooms: vec![],
//!     doors: vec![],
//!     windows: vec![],
//!     wall_thickness: 0.20,
//!     metrics: None,
//! };
//! let doc = PlanDocument::new("Author", "26-001", plan);
//!
//! save_document(&doc, Path::new("plan.json"))?;
//! let loaded = load_document(Path::new("plan.json"))?;
//! # Ok::<(), plan_core::errors::PlanError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::document::{DocumentMetadata, PlanDocument, SCHEMA_VERSION};
use crate::errors::{PlanError, PlanResult};
use crate::plan::Plan;

/// Save a document as pretty JSON, atomically.
pub fn save_document(doc: &PlanDocument, path: &Path) -> PlanResult<()> {
    let json = serde_json::to_string_pretty(doc).map_err(PlanError::serialization)?;
    write_atomic(path, json.as_bytes())
}

/// Load a document and check its schema version.
pub fn load_document(path: &Path) -> PlanResult<PlanDocument> {
    let contents = read_to_string(path)?;

    let doc: PlanDocument = serde_json::from_str(&contents).map_err(|e| PlanError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&doc.meta.version)?;

    Ok(doc)
}

/// Read a plan from either a saved document or a bare plan JSON file.
///
/// Either way the plan goes through [`Plan::from_value`], so a plan without
/// `terrain` or `rooms` fails with [`PlanError::MissingField`].
pub fn read_plan(path: &Path) -> PlanResult<Plan> {
    let contents = read_to_string(path)?;
    let mut value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| PlanError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    let Some(meta) = value.get_mut("meta").map(serde_json::Value::take) else {
        return Plan::from_value(value);
    };

    let meta: DocumentMetadata = serde_json::from_value(meta).map_err(PlanError::serialization)?;
    validate_version(&meta.version)?;

    let plan = value
        .get_mut("plan")
        .map(serde_json::Value::take)
        .ok_or_else(|| PlanError::missing_field("plan"))?;
    Plan::from_value(plan)
}

/// Write encoder output verbatim, atomically.
pub fn write_cad(bytes: &[u8], path: &Path) -> PlanResult<()> {
    write_atomic(path, bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn read_to_string(path: &Path) -> PlanResult<String> {
    let mut file = File::open(path).map_err(|e| PlanError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| PlanError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> PlanResult<()> {
    let tmp_path = tmp_path_for(path);

    let written = write_tmp(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path)
            .map_err(|e| PlanError::file_error("rename to final", path.display().to_string(), e.to_string()))
    });

    // Never leave a partial temp file behind
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

fn write_tmp(tmp_path: &Path, bytes: &[u8]) -> PlanResult<()> {
    let tmp_error = |operation: &str, e: std::io::Error| {
        PlanError::file_error(operation, tmp_path.display().to_string(), e.to_string())
    };

    let mut tmp_file = File::create(tmp_path).map_err(|e| tmp_error("create temp file", e))?;
    tmp_file.write_all(bytes).map_err(|e| tmp_error("write temp file", e))?;
    tmp_file.sync_all().map_err(|e| tmp_error("sync temp file", e))?;
    Ok(())
}

/// Major must match; in 0.x a newer minor is refused too.
fn validate_version(file_version: &str) -> PlanResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let mismatch = || PlanError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([_, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}
