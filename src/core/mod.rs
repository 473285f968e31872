//! Core module - Catalog data and storage
//!
//! Contains the parfum data model and the file-backed catalog store.

pub mod catalog;
pub mod parfum;
