//! Inline style markup
//!
//! A word in the document can carry one of four literal marker prefixes that
//! select the face it is drawn with. Markers only affect rendering: they are
//! removed from the text before it is written to disk.
//!
//! ```text
//! "[~|bold|~]Hi world"  →  [("Hi", Bold), ("world", Normal)]
//! ```

/// Marker selecting the bold face
pub const BOLD_MARKER: &str = "[~|bold|~]";
/// Marker selecting the italic face
pub const ITALIC_MARKER: &str = "[~|ital|~]";
/// Marker selecting the bold italic face
pub const BOLD_ITALIC_MARKER: &str = "[~|i+bol|~]";
/// Marker forcing the regular face
pub const NORMAL_MARKER: &str = "[~|norm|~]";

/// Face a token is drawn with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl Style {
    pub fn is_bold(self) -> bool {
        matches!(self, Style::Bold | Style::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Style::Italic | Style::BoldItalic)
    }
}

/// Marker literals in the order they are checked.
///
/// A word matching several prefixes takes the style of the first entry.
pub const MARKERS: &[(&str, Style)] = &[
    (BOLD_MARKER, Style::Bold),
    (ITALIC_MARKER, Style::Italic),
    (BOLD_ITALIC_MARKER, Style::BoldItalic),
    (NORMAL_MARKER, Style::Normal),
];

/// A single word of a line with its resolved style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    /// Word text with the marker removed
    pub text: String,
    pub style: Style,
}

impl StyledToken {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Tokens of one newline-delimited line, in order
pub type StyledLine = Vec<StyledToken>;

/// One [`StyledLine`] per line of the document
pub type ParsedDocument = Vec<StyledLine>;

/// Resolve the style of a single space-delimited word
fn parse_word(word: &str) -> StyledToken {
    for (marker, style) in MARKERS {
        if let Some(rest) = word.strip_prefix(marker) {
            return StyledToken::new(rest, *style);
        }
    }
    StyledToken::new(word, Style::Normal)
}

/// Split a line on single spaces and resolve each word's style.
///
/// Consecutive spaces yield empty tokens, so the number of tokens is always
/// one more than the number of spaces.
pub fn parse_line(line: &str) -> StyledLine {
    line.split(' ').map(parse_word).collect()
}

/// Parse every line of `text`. Empty lines yield a single empty normal token.
pub fn parse_document(text: &str) -> ParsedDocument {
    text.split('\n').map(parse_line).collect()
}

/// Remove every occurrence of the four markers.
///
/// Removing one marker can splice the surrounding text into another marker,
/// so passes repeat until nothing changes. This makes the result a fixed
/// point: stripping it again returns it unchanged.
pub fn strip_markup(text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let before = result.len();
        for (marker, _) in MARKERS {
            if result.contains(marker) {
                result = result.replace(marker, "");
            }
        }
        if result.len() == before {
            return result;
        }
    }
}

/// Number of characters left after stripping markup
pub fn stripped_len(text: &str) -> usize {
    strip_markup(text).chars().count()
}
