// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation document files.
//!
//! This module reads and writes documents on disk in YAML and JSON,
//! picking the format from the file extension.

use super::codec::{self, DocumentFormat};
use crate::models::document::AnnotationDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Export a document, choosing the format from the path's extension.
pub fn export_document(document: &AnnotationDocument, path: &Path) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    let text = codec::serialize(document, format)?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!(
        "Exported {} captions and {} events to {}",
        document.captions.len(),
        document.events.len(),
        path.display()
    );
    Ok(())
}

/// Import a document, choosing the format from the path's extension.
pub fn import_document(path: &Path) -> Result<AnnotationDocument> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = codec::deserialize(&text, format)?;
    log::info!(
        "Imported {} captions from {}",
        document.captions.len(),
        path.display()
    );
    Ok(document)
}
