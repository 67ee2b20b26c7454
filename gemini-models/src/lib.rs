//! Lists the models available to a Gemini API key.

pub mod client;
pub mod error;
pub mod lister;
pub mod models;

#[cfg(test)]
mod test_support;

pub use gemini_models_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use lister::ModelLister;
pub use models::{ModelListing, Models};
