//! IMDb Movie Star Search Core Library
//!
//! This crate provides the scraping core for looking up an actor on IMDb
//! and listing the titles they are credited in.
//!
//! # Features
//! - Resolve a typed name to search candidates
//! - Load a candidate's filmography, newest or oldest first
//! - Validate typed names
//! - Export a filmography as a JSON document

pub mod client;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use client::{ClientConfig, ImdbClient, IMDB_BASE_URL};
pub use error::{ImdbError, Result};
pub use export::{export_file_name, write_filmography};
pub use scraper::ImdbScraper;
pub use types::{Candidate, Filmography};
pub use validate::NameValidator;
