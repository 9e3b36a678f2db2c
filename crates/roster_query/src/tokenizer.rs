//! Input tokenization.
//!
//! Command text is line-oriented: each non-blank line is one clause. Within a
//! line only the leading words are significant (command token, `not`,
//! keyword); everything after the keyword is kept verbatim as the argument.

/// One non-blank input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputLine<'a> {
    /// 1-based position in the raw input, counting blank lines.
    pub number: usize,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
}

/// Tokenizes command text.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits raw input into trimmed, non-blank lines.
    ///
    /// Line numbers refer to the raw input, so an error on the third raw
    /// line is reported as line 3 even if line 2 was blank.
    #[must_use]
    pub fn lines(input: &str) -> Vec<InputLine<'_>> {
        input
            .lines()
            .enumerate()
            .map(|(i, line)| InputLine {
                number: i + 1,
                text: line.trim(),
            })
            .filter(|line| !line.text.is_empty())
            .collect()
    }

    /// Splits off the first whitespace-delimited word.
    ///
    /// Returns the word and the trimmed remainder; both are empty for blank
    /// input.
    #[must_use]
    pub fn split_word(text: &str) -> (&str, &str) {
        let text = text.trim_start();
        match text.find(char::is_whitespace) {
            Some(end) => (&text[..end], text[end..].trim()),
            None => (text, ""),
        }
    }
}
