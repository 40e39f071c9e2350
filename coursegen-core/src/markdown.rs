//! Title and summary extraction from markdown bodies.
//!
//! No HTML is rendered here; the reader renders `contentMd` itself.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Title line and remaining summary of a markdown body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleAndSummary {
    pub title: String,
    pub summary: String,
}

/// Split a body into its first non-blank line (as plain text) and the rest.
///
/// ```
/// use coursegen_core::markdown::title_and_summary;
///
/// let parts = title_and_summary("# Intro to *Rust*\n\nOwnership and borrowing.\n");
/// assert_eq!(parts.title, "Intro to Rust");
/// assert_eq!(parts.summary, "Ownership and borrowing.");
/// ```
pub fn title_and_summary(body: &str) -> TitleAndSummary {
    let body = body.trim_start_matches(['\r', '\n', ' ', '\t']);
    let (first, rest) = match body.find('\n') {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, ""),
    };

    TitleAndSummary {
        title: plain_text(first.trim_end_matches('\r')),
        summary: rest.trim().to_string(),
    }
}

/// Strip markdown syntax from a snippet, keeping its text content
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => out.push(' '),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_heading_title() {
        let parts = title_and_summary("## Setup\r\nInstall the toolchain.\r\n");
        assert_eq!(parts.title, "Setup");
        assert_eq!(parts.summary, "Install the toolchain.");
    }

    #[test]
    fn test_inline_markup_removed() {
        assert_eq!(plain_text("# Using `cargo` **well**"), "Using cargo well");
        assert_eq!(plain_text("[Docs](https://example.com)"), "Docs");
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let parts = title_and_summary("\n\nWelcome\n");
        assert_eq!(parts.title, "Welcome");
        assert_eq!(parts.summary, "");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(title_and_summary(""), TitleAndSummary::default());
    }
}
