//! Main IMDb scraper API
//!
//! Combines the HTTP client with the parsers: resolve a typed name to
//! candidates, then load one candidate's filmography.

use crate::client::{ClientConfig, ImdbClient};
use crate::error::Result;
use crate::parser::{build_search_path, parse_credit_titles, parse_search_results};
use crate::types::{Candidate, Filmography};

/// Main scraper API for IMDb
///
/// # Example
/// ```no_run
/// use imdb_core::ImdbScraper;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ImdbScraper::new()?;
///     let candidates = scraper.resolve_candidates("Tom Cruise").await?;
///     if let Some(candidate) = candidates.first() {
///         let filmography = scraper.filmography(candidate, true).await?;
///         println!("{} titles", filmography.titles.len());
///     }
///     Ok(())
/// }
/// ```
pub struct ImdbScraper {
    client: ImdbClient,
}

impl ImdbScraper {
    /// Create a new scraper against IMDb with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper from a client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(ImdbClient::with_config(config)?))
    }

    /// Create a new scraper with a custom client.
    pub fn with_client(client: ImdbClient) -> Self {
        Self { client }
    }

    /// Search for actors by name.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` in search page order, empty if nothing matched
    /// * `Err(ImdbError::InvalidUrl)` if the name is empty
    /// * `Err(ImdbError::HttpError)` on transport failure
    pub async fn resolve_candidates(&self, name: &str) -> Result<Vec<Candidate>> {
        let path = build_search_path(name)?;
        let html = self.client.fetch(&path).await?;
        let candidates = parse_search_results(&html)?;

        tracing::info!(name, count = candidates.len(), "resolved candidates");
        Ok(candidates)
    }

    /// Load the credited titles of one candidate.
    ///
    /// `newest_first` keeps the profile page order, which lists the newest
    /// credit first; otherwise the list is reversed. An empty title list is
    /// a valid result.
    pub async fn filmography(&self, candidate: &Candidate, newest_first: bool) -> Result<Filmography> {
        let html = self.client.fetch(&candidate.profile_reference).await?;
        let titles = parse_credit_titles(&html)?;

        tracing::info!(
            actor = %candidate.display_name,
            count = titles.len(),
            newest_first,
            "loaded filmography"
        );
        Ok(Filmography::from_page_order(
            candidate.display_name.clone(),
            titles,
            newest_first,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImdbError;

    #[test]
    fn test_scraper_creation() {
        let scraper = ImdbScraper::new();
        assert!(scraper.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_empty_name() {
        let scraper = ImdbScraper::new().unwrap();
        let result = scraper.resolve_candidates("").await;

        match result {
            Err(ImdbError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}
