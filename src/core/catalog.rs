//! Catalog store - JSON file backend
//!
//! # Key Points
//! - One pretty-printed JSON document holds every parfum
//! - Every operation re-reads the file; mutations write the whole document back
//! - Writes go to a sibling temp file that is renamed over the target
//! - No locking: two processes mutating at once lose the earlier write

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::parfum::{CatalogDocument, CatalogStats, NewParfum, Parfum, ParfumPatch};
use crate::error::{Error, Result};

/// File-backed parfum catalog
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Point the store at a catalog file. Nothing is read until an operation runs.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty catalog if none exists yet. Returns true when a file was written.
    pub fn init_empty(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&CatalogDocument::default())?;
        Ok(true)
    }

    /// Read and parse the catalog file
    pub fn load(&self) -> Result<CatalogDocument> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| Error::persistence(&self.path, e))?;
        let doc: CatalogDocument = serde_json::from_str(&content)
            .map_err(|e| Error::persistence(&self.path, format!("malformed catalog: {}", e)))?;

        debug!(path = %self.path.display(), parfums = doc.parfums.len(), "catalog loaded");
        Ok(doc)
    }

    /// Serialize and replace the catalog file atomically
    pub fn save(&self, doc: &CatalogDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| Error::persistence(&self.path, e))?;
        write_atomic(&self.path, json.as_bytes())?;

        debug!(path = %self.path.display(), parfums = doc.parfums.len(), "catalog saved");
        Ok(())
    }

    /// Case-insensitive substring search on name, brand, category and description
    pub fn search(&self, query: &str) -> Result<Vec<Parfum>> {
        Ok(self.load()?.search(query))
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Parfum>> {
        Ok(self.load()?.get_by_id(id).cloned())
    }

    pub fn get_by_brand(&self, brand: &str) -> Result<Vec<Parfum>> {
        Ok(self.load()?.get_by_brand(brand))
    }

    pub fn get_by_category(&self, category: &str) -> Result<Vec<Parfum>> {
        Ok(self.load()?.get_by_category(category))
    }

    pub fn get_by_gender(&self, gender: &str) -> Result<Vec<Parfum>> {
        Ok(self.load()?.get_by_gender(gender))
    }

    pub fn brands(&self) -> Result<Vec<String>> {
        Ok(self.load()?.brands)
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(self.load()?.categories)
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(self.load()?.stats())
    }

    /// Append a parfum under the next free numeric id
    pub fn add(&self, fields: NewParfum) -> Result<Parfum> {
        let mut doc = self.load()?;
        let parfum = Parfum::from_new(doc.next_id(), fields);

        doc.parfums.push(parfum.clone());
        self.save(&doc)?;

        info!(id = %parfum.id, name = %parfum.name, "parfum added");
        Ok(parfum)
    }

    /// Merge `patch` onto the parfum with `id`
    pub fn update(&self, id: &str, patch: ParfumPatch) -> Result<Parfum> {
        let mut doc = self.load()?;
        let parfum = doc
            .parfums
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        parfum.apply(patch);
        let updated = parfum.clone();
        self.save(&doc)?;

        info!(id = %updated.id, name = %updated.name, "parfum updated");
        Ok(updated)
    }

    /// Remove the parfum with `id`
    pub fn delete(&self, id: &str) -> Result<Parfum> {
        let mut doc = self.load()?;
        let index = doc
            .parfums
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let removed = doc.parfums.remove(index);
        self.save(&doc)?;

        info!(id = %removed.id, name = %removed.name, "parfum deleted");
        Ok(removed)
    }

    /// Copy the current catalog file to `backup-parfums-<timestamp>.json` beside it
    pub fn backup(&self) -> Result<PathBuf> {
        // fail on a missing or broken catalog rather than copying garbage
        self.load()?;

        let stamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ");
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let target = dir.join(format!("backup-parfums-{}.json", stamp));

        fs::copy(&self.path, &target).map_err(|e| Error::persistence(&target, e))?;

        info!(backup = %target.display(), "catalog backed up");
        Ok(target)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::persistence(path, e))?;

    let tmp = parent.join(format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|s| s.to_str()).unwrap_or("catalog"),
        std::process::id()
    ));

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::persistence(path, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::persistence(path, e));
    }

    Ok(())
}
