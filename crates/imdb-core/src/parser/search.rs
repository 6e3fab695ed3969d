//! Search results parser for IMDb
//!
//! Parses the name search page (`find?q=...&s=nm`) into candidates.

use crate::error::{ImdbError, Result};
use crate::types::Candidate;

use super::document::Page;

/// Class of the table holding search results
const RESULTS_TABLE_CLASS: &str = "findList";

/// Class of the cell holding one result's link
const RESULT_TEXT_CLASS: &str = "result_text";

/// Build the site-relative search path for an actor name.
///
/// Spaces become `+`; anything else the query needs escaped is
/// percent-encoded, so `O'Brien` is sent as `O%27Brien` rather than with a
/// raw apostrophe. The server decodes both forms to the same name.
/// Results are restricted to name entities.
///
/// # Errors
/// Returns `ImdbError::InvalidUrl` if the name is empty or whitespace-only.
///
/// # Examples
/// ```
/// use imdb_core::parser::build_search_path;
///
/// assert_eq!(build_search_path("Tom Cruise").unwrap(), "find?q=Tom+Cruise&s=nm");
/// ```
pub fn build_search_path(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(ImdbError::InvalidUrl(
            "Search name cannot be empty".to_string(),
        ));
    }

    let query = name
        .split(' ')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("+");

    Ok(format!("find?q={}&s=nm", query))
}

/// Parse candidates from IMDb search page HTML.
///
/// Returns an empty list when the results table is absent. Each result
/// row contributes its first link's text and target, in document order.
///
/// # Errors
/// - `ImdbError::ElementNotFound` if a result row has no link or the link
///   has no target
pub fn parse_search_results(html: &str) -> Result<Vec<Candidate>> {
    let page = Page::parse(html);

    let Some(table) = page
        .find_by_class("table", RESULTS_TABLE_CLASS)?
        .into_iter()
        .next()
    else {
        tracing::debug!("no results table on search page");
        return Ok(Vec::new());
    };

    let mut candidates = Vec::new();
    for (row, cell) in table
        .find_by_class("td", RESULT_TEXT_CLASS)?
        .into_iter()
        .enumerate()
    {
        let link = cell.first("a")?.ok_or_else(|| {
            ImdbError::ElementNotFound(format!("link in search result row {}", row + 1))
        })?;
        let href = link.attr("href").ok_or_else(|| {
            ImdbError::ElementNotFound(format!("href in search result row {}", row + 1))
        })?;

        candidates.push(Candidate::new(link.text(), href));
    }

    tracing::debug!(count = candidates.len(), "parsed search results");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_page(rows: &[(&str, &str)]) -> String {
        let rows: String = rows
            .iter()
            .map(|(name, href)| {
                format!(
                    r#"<tr class="findResult"><td class="primary_photo"><a href="{href}"><img/></a></td><td class="result_text"> <a href="{href}">{name}</a> (Actor)</td></tr>"#
                )
            })
            .collect();
        format!(
            r#"<html><body><div class="findSection"><table class="findList">{rows}</table></div></body></html>"#
        )
    }

    #[test]
    fn test_build_search_path_spaces_become_plus() {
        assert_eq!(
            build_search_path("Samuel L Jackson").unwrap(),
            "find?q=Samuel+L+Jackson&s=nm"
        );
        assert_eq!(build_search_path("Cher").unwrap(), "find?q=Cher&s=nm");
    }

    #[test]
    fn test_build_search_path_escapes_punctuation() {
        assert_eq!(
            build_search_path("Conan O'Brien").unwrap(),
            "find?q=Conan+O%27Brien&s=nm"
        );
    }

    #[test]
    fn test_build_search_path_empty() {
        assert!(matches!(build_search_path(""), Err(ImdbError::InvalidUrl(_))));
        assert!(matches!(build_search_path("   "), Err(ImdbError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_rows_in_document_order() {
        let html = search_page(&[
            ("Tom Cruise", "/name/nm0000129/"),
            ("Tom Cruise Jr.", "/name/nm0000002/"),
            ("Tom Cruiser", "/name/nm0000003/"),
        ]);
        let candidates = parse_search_results(&html).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new("Tom Cruise", "/name/nm0000129/"),
                Candidate::new("Tom Cruise Jr.", "/name/nm0000002/"),
                Candidate::new("Tom Cruiser", "/name/nm0000003/"),
            ]
        );
    }

    #[test]
    fn test_parse_single_row() {
        let html = search_page(&[("Keanu Reeves", "/name/nm0000206/")]);
        let candidates = parse_search_results(&html).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "Keanu Reeves");
    }

    #[test]
    fn test_parse_table_without_rows() {
        let candidates = parse_search_results(&search_page(&[])).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_parse_empty_html() {
        let candidates = parse_search_results("<html><body></body></html>").unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_only_first_table_is_used() {
        let html = r#"<html><body>
            <table class="findList"><tr><td class="result_text"><a href="/name/nm1/">First</a></td></tr></table>
            <table class="findList"><tr><td class="result_text"><a href="/name/nm2/">Second</a></td></tr></table>
        </body></html>"#;
        let candidates = parse_search_results(html).unwrap();
        assert_eq!(candidates, vec![Candidate::new("First", "/name/nm1/")]);
    }

    #[test]
    fn test_row_without_link_is_structural_fault() {
        let html = r#"<html><body><table class="findList">
            <tr><td class="result_text">No link here</td></tr>
        </table></body></html>"#;
        let result = parse_search_results(html);
        assert!(matches!(result, Err(ImdbError::ElementNotFound(_))));
    }
}
