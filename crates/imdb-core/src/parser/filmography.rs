//! Profile page parser for IMDb
//!
//! Every credited title sits in its own `div` whose id contains `actor-`;
//! the title is the first bold element inside it.

use regex_lite::Regex;

use crate::error::{ImdbError, Result};

use super::document::Page;

/// Id fragment that marks a credit block
const CREDIT_ID_PATTERN: &str = "actor-";

/// Parse credited titles from an actor profile page, in document order.
///
/// Zero blocks gives an empty list, not an error.
///
/// # Errors
/// - `ImdbError::ElementNotFound` if a credit block has no bold title
pub fn parse_credit_titles(html: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(CREDIT_ID_PATTERN)
        .map_err(|e| ImdbError::ParseError(format!("Invalid credit id pattern: {}", e)))?;
    let page = Page::parse(html);

    let mut titles = Vec::new();
    for block in page.find_by_id_pattern("div", &pattern)? {
        let title = block.first("b")?.ok_or_else(|| {
            ImdbError::ElementNotFound(format!(
                "bold title in credit block {}",
                block.attr("id").unwrap_or_default()
            ))
        })?;
        titles.push(title.text());
    }

    tracing::debug!(count = titles.len(), "parsed credit titles");
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_page(blocks: &[(&str, &str)]) -> String {
        let blocks: String = blocks
            .iter()
            .map(|(id, title)| {
                format!(
                    r#"<div class="filmo-row" id="{id}"><span class="year_column">2020</span><b><a href="/title/{id}/">{title}</a></b><br/>Character</div>"#
                )
            })
            .collect();
        format!(r#"<html><body><div class="filmo-category-section">{blocks}</div></body></html>"#)
    }

    #[test]
    fn test_titles_in_document_order() {
        let html = profile_page(&[
            ("actor-tt3", "Mission: Impossible"),
            ("actor-tt2", "Top Gun"),
            ("actor-tt1", "Risky Business"),
        ]);
        let titles = parse_credit_titles(&html).unwrap();
        assert_eq!(titles, vec!["Mission: Impossible", "Top Gun", "Risky Business"]);
    }

    #[test]
    fn test_non_actor_blocks_are_ignored() {
        let html = profile_page(&[
            ("producer-tt9", "Produced Thing"),
            ("actor-tt1", "Acted Thing"),
            ("self-tt8", "Talk Show"),
        ]);
        let titles = parse_credit_titles(&html).unwrap();
        assert_eq!(titles, vec!["Acted Thing"]);
    }

    #[test]
    fn test_only_first_bold_is_taken() {
        let html = r#"<div id="actor-tt1"><b>Title</b> <b>Extra</b></div>"#;
        assert_eq!(parse_credit_titles(html).unwrap(), vec!["Title"]);
    }

    #[test]
    fn test_non_ascii_titles() {
        let html = profile_page(&[("actor-tt1", "Amélie"), ("actor-tt2", "千と千尋の神隠し")]);
        let titles = parse_credit_titles(&html).unwrap();
        assert_eq!(titles, vec!["Amélie", "千と千尋の神隠し"]);
    }

    #[test]
    fn test_no_credit_blocks() {
        let titles = parse_credit_titles("<html><body><p>Nothing</p></body></html>").unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_block_without_bold_is_structural_fault() {
        let html = r#"<div id="actor-tt1"><i>not bold</i></div>"#;
        let result = parse_credit_titles(html);
        assert!(matches!(result, Err(ImdbError::ElementNotFound(msg)) if msg.contains("actor-tt1")));
    }
}
