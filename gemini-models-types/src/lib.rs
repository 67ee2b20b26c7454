//! Shared types for the Gemini model lister.

pub mod models;
