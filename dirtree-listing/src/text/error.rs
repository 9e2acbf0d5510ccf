use std::fmt::Display;

/// A detailed error for a line of a listing that does not follow the grammar
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError<'a> {
    error: String,
    text: &'a str,
    span: &'a str,
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lineno = self.line_number();
        let line = self.line();
        let offset = (self.span.as_ptr() as usize)
            .saturating_sub(line.as_ptr() as usize)
            .min(line.len());
        let column = line
            .get(..offset)
            .map(|before| before.chars().count())
            .unwrap_or(0);
        writeln!(f, "Error: {}", self.error)?;
        writeln!(f, "     |")?;
        writeln!(f, "{lineno:4} | {line}")?;
        if column == 0 {
            writeln!(f, "     |")?;
        } else {
            writeln!(f, "     | {0:1$}^", "", column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError<'_> {}

impl<'a> ParseError<'a> {
    /// Constructs a detailed error for an issue encountered during parsing
    ///
    /// The `span` must be a slice of `text`, marking where the problem was found.
    pub fn new(error: String, text: &'a str, span: &'a str) -> ParseError<'a> {
        ParseError { error, text, span }
    }

    /// A short description of the problem
    pub fn message(&self) -> &str {
        &self.error
    }

    /// Returns the calculated line number of the span within the text
    pub fn line_number(&self) -> usize {
        let pos = self.span.as_ptr() as usize - self.text.as_ptr() as usize;
        self.text[..pos].chars().filter(|&c| c == '\n').count() + 1
    }

    /// The full line of text containing the problem
    pub fn line(&self) -> &'a str {
        self.text
            .lines()
            .nth(self.line_number() - 1)
            .unwrap_or("<EOF>")
    }

    /// Detaches this error from the text it was parsed from
    ///
    /// The result keeps the rendered message and can outlive the listing.
    pub fn to_owned_error(&self) -> OwnedParseError {
        OwnedParseError {
            line_number: self.line_number(),
            rendered: self.to_string(),
        }
    }
}

/// A [`ParseError`] with its rendering captured, independent of the listing's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedParseError {
    line_number: usize,
    rendered: String,
}

impl OwnedParseError {
    /// The line number of the malformed line
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Display for OwnedParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl std::error::Error for OwnedParseError {}
