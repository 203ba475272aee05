use std::{
    fmt::{self, Debug, Display, Formatter},
    str,
    sync::{Arc, LazyLock},
};

use tracing::{debug, instrument};

use crate::{
    cleaner::TextCleaner,
    document::{ParsedDocument, TagQuery},
    extractor_config::{ExtractorConfig, DEFAULT_SELECTOR},
    visitor::{ParagraphVisitor, Visitor},
    ExtractError,
};

// Compiled once; `p` is a literal tag name and always parses.
static PARAGRAPH_QUERY: LazyLock<TagQuery> = LazyLock::new(|| {
    TagQuery::parse(DEFAULT_SELECTOR).expect("`p` is a valid selector")
});

/// A builder for the `ParagraphExtractor` struct
/// that allows for overriding the default policy
/// before building it
#[derive(Default)]
pub struct ParagraphExtractorBuilder {
    config: Option<String>,
    min_chars: Option<usize>,
    selector: Option<String>,
    separator: Option<String>,
    cleaner: Option<Arc<dyn TextCleaner>>,
}

impl ParagraphExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config file path or inline JSON/TOML, see [`ExtractorConfig::from_config`].
    /// Explicit `with_*` settings win over values from the config.
    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = Some(min_chars);
        self
    }

    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selector = Some(selector.to_string());
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = Some(separator.to_string());
        self
    }

    pub fn with_cleaner<T: TextCleaner + 'static>(mut self, cleaner: T) -> Self {
        self.cleaner = Some(Arc::new(cleaner));
        self
    }

    pub fn build(self) -> Result<ParagraphExtractor, ExtractError> {
        let mut config = match &self.config {
            Some(config_str) => ExtractorConfig::from_config(config_str)?,
            None => ExtractorConfig::default(),
        };
        if let Some(min_chars) = self.min_chars {
            config.min_chars = min_chars;
        }
        if let Some(selector) = self.selector {
            config.selector = selector;
        }
        if let Some(separator) = self.separator {
            config.separator = separator;
        }

        let query = TagQuery::parse(&config.selector)?;
        Ok(ParagraphExtractor {
            config,
            query,
            cleaner: self.cleaner,
        })
    }
}

/// Pulls the readable paragraph text out of an HTML document.
///
/// Every element matching the configured selector (`p` by default) is
/// visited in document order; its text is trimmed, and it is kept only if
/// that text is longer than `min_chars` characters. Short fragments such
/// as button labels and captions fall away.
///
/// # Example
///
/// ```
/// use paragraph_extractor::ParagraphExtractor;
///
/// let extractor = ParagraphExtractor::default();
/// let html = "<p>First paragraph text here.</p><p>OK</p><p>Second paragraph text here.</p>";
///
/// assert_eq!(
///     extractor.extract(html),
///     "First paragraph text here.\n\nSecond paragraph text here."
/// );
/// ```
#[derive(Clone)]
pub struct ParagraphExtractor {
    config: ExtractorConfig,
    query: TagQuery,
    cleaner: Option<Arc<dyn TextCleaner>>,
}

impl Debug for ParagraphExtractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParagraphExtractor")
            .field("config", &self.config)
            .field("cleaner", &self.cleaner.is_some())
            .finish()
    }
}

impl ParagraphExtractor {
    pub fn builder() -> ParagraphExtractorBuilder {
        ParagraphExtractorBuilder::new()
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The kept paragraphs, in document order.
    pub fn extract_paragraphs(&self, html: &str) -> ExtractedText {
        let document = ParsedDocument::parse(html);
        let mut visitor = ParagraphVisitor::new(self.config.min_chars, self.cleaner.as_deref());

        let mut selected = 0usize;
        let paragraphs: Vec<String> = document
            .select_by_tag(&self.query)
            .inspect(|_| selected += 1)
            .filter_map(|node| visitor.visit_paragraph(&node))
            .collect();

        debug!(
            selector = self.query.as_str(),
            selected,
            kept = paragraphs.len(),
            "extracted paragraphs"
        );

        ExtractedText {
            paragraphs,
            separator: self.config.separator.clone(),
        }
    }

    /// The kept paragraphs joined by the configured separator; empty when
    /// nothing survives.
    pub fn extract(&self, html: &str) -> String {
        self.extract_paragraphs(html).to_string()
    }

    /// Like [`extract`](Self::extract) for raw bytes, which must be UTF-8.
    pub fn extract_bytes(&self, html: &[u8]) -> Result<String, ExtractError> {
        let html = str::from_utf8(html)?;
        Ok(self.extract(html))
    }

    /// One result per document, in input order.
    #[instrument(skip_all, fields(documents = documents.len()))]
    pub fn extract_batch(&self, documents: &[&str]) -> Vec<String> {
        #[cfg(feature = "multi_thread")]
        {
            use rayon::prelude::*;
            documents.par_iter().map(|html| self.extract(html)).collect()
        }
        #[cfg(not(feature = "multi_thread"))]
        {
            documents.iter().map(|html| self.extract(html)).collect()
        }
    }
}

impl Default for ParagraphExtractor {
    fn default() -> Self {
        ParagraphExtractor {
            config: ExtractorConfig::default(),
            query: PARAGRAPH_QUERY.clone(),
            cleaner: None,
        }
    }
}

/// Paragraph texts that survived filtering, in document order.
///
/// Displays as the paragraphs joined by the separator of the extractor
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    paragraphs: Vec<String>,
    separator: String,
}

impl ExtractedText {
    pub fn as_slice(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.paragraphs
    }

    pub fn join(&self, separator: &str) -> String {
        self.paragraphs.join(separator)
    }
}

impl Display for ExtractedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(&self.separator))
    }
}
