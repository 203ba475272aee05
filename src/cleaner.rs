/// Normalizes a paragraph's text after it has been trimmed.
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

// Joins the non-blank lines of a paragraph with single spaces
pub struct DefaultCleaner;

impl TextCleaner for DefaultCleaner {
    fn clean(&self, text: &str) -> String {
        text.lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// Collapses every run of whitespace, including newlines and tabs, to one space.
pub struct WhitespaceCleaner;

impl TextCleaner for WhitespaceCleaner {
    fn clean(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }
}
