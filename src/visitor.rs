use tracing::trace;

use crate::{cleaner::TextCleaner, document::ParagraphNode};

pub trait Visitor {
    /// Returns the text to keep for `node`, or `None` if it is dropped.
    fn visit_paragraph(&mut self, node: &ParagraphNode<'_>) -> Option<String>;
    fn visit_text(&mut self, text: &str) -> String;
}

/// Trims each paragraph, runs the optional cleaner, and keeps it only if
/// its length in chars is strictly greater than `min_chars`.
pub struct ParagraphVisitor<'c> {
    min_chars: usize,
    cleaner: Option<&'c dyn TextCleaner>,
}

impl<'c> ParagraphVisitor<'c> {
    pub fn new(min_chars: usize, cleaner: Option<&'c dyn TextCleaner>) -> Self {
        ParagraphVisitor { min_chars, cleaner }
    }
}

impl Visitor for ParagraphVisitor<'_> {
    fn visit_paragraph(&mut self, node: &ParagraphNode<'_>) -> Option<String> {
        let text = self.visit_text(&node.text_content());
        let len = text.chars().count();
        if len > self.min_chars {
            Some(text)
        } else {
            trace!(len, min_chars = self.min_chars, "dropping short paragraph");
            None
        }
    }

    fn visit_text(&mut self, text: &str) -> String {
        let trimmed = text.trim();
        if let Some(cleaner) = self.cleaner {
            cleaner.clean(trimmed)
        } else {
            trimmed.to_string()
        }
    }
}
