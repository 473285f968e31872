//! parfum - fragrance catalog with an AI consultant
//!
//! A JSON-file catalog of parfums plus a consultation client that turns
//! curated catalog data into prompts for a chat completions service.
//!
//! ## Key Concepts
//!
//! - **Catalog store**: every operation re-reads the file; mutations rewrite it atomically
//! - **Curated context**: each consultation task sends only a fixed subset of fields
//! - **Error taxonomy**: config, persistence, not-found, validation, transport, service

pub mod cli;
pub mod config;
pub mod consult;
pub mod core;
pub mod error;

pub use crate::consult::{ConsultationClient, PreferenceProfile, Task};
pub use crate::core::catalog::CatalogStore;
pub use crate::core::parfum::{CatalogDocument, Gender, NewParfum, Notes, Parfum, ParfumPatch, PriceRange, Sillage};
pub use crate::error::{Error, ErrorKind, Result, TransportKind};
