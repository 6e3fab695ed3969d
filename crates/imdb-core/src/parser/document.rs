//! Document query layer
//!
//! The search and filmography parsers only ever ask for elements by tag and
//! class, by tag and id pattern, for text and for attributes. Everything that
//! touches the `scraper` crate lives here.

use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ImdbError, Result};

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ImdbError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

fn class_selector(tag: &str, class: &str) -> Result<Selector> {
    compile(&format!("{}.{}", tag, class))
}

/// A parsed HTML page
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All `tag` elements carrying `class`, in document order.
    pub fn find_by_class(&self, tag: &str, class: &str) -> Result<Vec<Node<'_>>> {
        let selector = class_selector(tag, class)?;
        Ok(self.document.select(&selector).map(Node::from).collect())
    }

    /// All `tag` elements whose `id` attribute contains a match of `pattern`,
    /// in document order.
    pub fn find_by_id_pattern(&self, tag: &str, pattern: &Regex) -> Result<Vec<Node<'_>>> {
        let selector = compile(&format!("{}[id]", tag))?;
        Ok(self
            .document
            .select(&selector)
            .filter(|el| el.value().id().is_some_and(|id| pattern.is_match(id)))
            .map(Node::from)
            .collect())
    }
}

/// One element inside a [`Page`]
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Node<'a> {
    /// Descendant `tag` elements carrying `class`, in document order.
    pub fn find_by_class(&self, tag: &str, class: &str) -> Result<Vec<Node<'a>>> {
        let selector = class_selector(tag, class)?;
        Ok(self.element.select(&selector).map(Node::from).collect())
    }

    /// First descendant `tag` element, if any.
    pub fn first(&self, tag: &str) -> Result<Option<Node<'a>>> {
        let selector = compile(tag)?;
        Ok(self.element.select(&selector).next().map(Node::from))
    }

    /// Concatenated text of the element and its descendants, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
