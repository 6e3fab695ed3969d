//! HTML parsers for IMDb pages
//!
//! - `document`: narrow query layer over the HTML parsing library
//! - `search`: parse the name search results page
//! - `filmography`: parse the credits on an actor's profile page

pub mod document;
pub mod filmography;
pub mod search;

// Re-export main parsing functions
pub use document::{Node, Page};
pub use filmography::parse_credit_titles;
pub use search::{build_search_path, parse_search_results};
