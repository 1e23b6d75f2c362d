//! JSON rendering and file placement for generated artifacts.
//!
//! Definition and schema documents are written with a 4-space indent,
//! example documents with a 2-space indent. Output is UTF-8 with non-ASCII
//! characters left unescaped and no trailing newline. Existing files are
//! overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use rde_model::Artifact;

const INDENT_UNIT: &[u8] = b"    ";

/// Render a document with the artifact's indent width.
pub fn render_artifact<T: Serialize>(artifact: Artifact, document: &T) -> Result<String> {
    let indent = &INDENT_UNIT[..artifact.indent_width()];
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .with_context(|| format!("serialize {artifact}"))?;
    String::from_utf8(buffer).context("serialized JSON was not UTF-8")
}

/// Render and write one artifact into the workbook's output folder,
/// overwriting any existing file. Returns the written path.
pub fn write_artifact<T: Serialize>(
    output_dir: &Path,
    artifact: Artifact,
    document: &T,
) -> Result<PathBuf> {
    let path = output_dir.join(artifact.file_name());
    let text = render_artifact(artifact, document)?;
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    info!(artifact = %artifact, path = %path.display(), "wrote artifact");
    Ok(path)
}

/// Create (if needed) and return the output folder for a workbook: a sibling
/// directory named after the workbook's file stem.
pub fn output_dir_for(workbook_path: &Path, stem: &str) -> Result<PathBuf> {
    let dir = workbook_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join(stem);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
