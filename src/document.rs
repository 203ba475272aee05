//! Thin wrapper over the `scraper` parse tree.
//!
//! The extractor only needs three things from an HTML parser: a lenient
//! parse, element selection in document order, and the text content of a
//! selected element. Nothing else from `scraper` leaks past this module.

use scraper::{ElementRef, Html, Selector};

use crate::ExtractError;

/// A compiled element query, usually a bare tag name such as `p`.
#[derive(Debug, Clone)]
pub struct TagQuery {
    source: String,
    selector: Selector,
}

impl TagQuery {
    pub fn parse(tag: &str) -> Result<Self, ExtractError> {
        let selector = Selector::parse(tag).map_err(|e| ExtractError::InvalidSelector {
            selector: tag.to_string(),
            reason: e.to_string(),
        })?;
        Ok(TagQuery {
            source: tag.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// A parsed HTML document. Malformed markup is recovered the way a browser
/// would, so parsing never fails.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(html: &str) -> Self {
        ParsedDocument {
            html: Html::parse_document(html),
        }
    }

    /// Matching elements in depth-first, pre-order document order.
    pub fn select_by_tag<'a>(
        &'a self,
        query: &'a TagQuery,
    ) -> impl Iterator<Item = ParagraphNode<'a>> + 'a {
        self.html.select(&query.selector).map(ParagraphNode)
    }
}

#[derive(Clone, Copy)]
pub struct ParagraphNode<'a>(ElementRef<'a>);

impl ParagraphNode<'_> {
    /// All descendant text nodes concatenated, markup dropped.
    pub fn text_content(&self) -> String {
        self.0.text().collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(html: &str, tag: &str) -> Vec<String> {
        let document = ParsedDocument::parse(html);
        let query = TagQuery::parse(tag).unwrap();
        document
            .select_by_tag(&query)
            .map(|node| node.text_content())
            .collect()
    }

    #[test]
    fn text_content_ignores_markup() {
        assert_eq!(
            texts("<p>Hello <b>bold</b> <a href='#'>link</a>!</p>", "p"),
            vec!["Hello bold link!"]
        );
    }

    #[test]
    fn selection_follows_document_order() {
        let html = "<div><p>one</p><section><p>two</p></section></div><p>three</p>";
        assert_eq!(texts(html, "p"), vec!["one", "two", "three"]);
    }

    #[test]
    fn unclosed_paragraphs_are_recovered() {
        assert_eq!(texts("<p>first<p>second", "p"), vec!["first", "second"]);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(texts("<p>fish &amp; chips</p>", "p"), vec!["fish & chips"]);
    }

    #[test]
    fn bad_query_is_rejected() {
        let err = TagQuery::parse("p[").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn empty_document_has_no_paragraphs() {
        assert!(texts("", "p").is_empty());
    }
}
