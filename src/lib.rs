//! Extracts the readable paragraph text from an HTML document, dropping
//! short fragments such as UI labels.

mod cleaner;
mod document;
mod error;
mod extractor;
mod extractor_config;
mod visitor;

pub use cleaner::{DefaultCleaner, TextCleaner, WhitespaceCleaner};
pub use document::{ParagraphNode, ParsedDocument, TagQuery};
pub use error::{ConfigError, ExtractError};
pub use extractor::{ExtractedText, ParagraphExtractor, ParagraphExtractorBuilder};
pub use extractor_config::{ExtractorConfig, DEFAULT_MIN_CHARS, DEFAULT_SELECTOR, DEFAULT_SEPARATOR};
pub use visitor::{ParagraphVisitor, Visitor};

/// Text of every `<p>` whose trimmed text is longer than ten characters,
/// in document order, separated by blank lines.
///
/// ```
/// assert_eq!(
///     paragraph_extractor::extract_main_paragraphs("<p>  Padded text example here  </p>"),
///     "Padded text example here"
/// );
/// ```
pub fn extract_main_paragraphs(html: &str) -> String {
    ParagraphExtractor::default().extract(html)
}
