//! Consultation module
//!
//! Curates catalog data into prompts and asks a chat completions service
//! for recommendations, answers and comparisons.

mod client;
pub mod curate;
pub mod prompt;
mod types;

pub use client::{ConsultationClient, Task, COMPARISON_TEMPERATURE};
pub use prompt::{PreferenceProfile, Prompt};
pub use types::*;
