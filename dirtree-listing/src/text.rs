use std::{iter::Enumerate, str::Lines};

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while},
    character::complete::{char, space0},
    combinator::{all_consuming, map, opt, value, verify},
    error::{context, ErrorKind, VerboseError, VerboseErrorKind},
    sequence::{terminated, tuple},
    IResult,
};

use crate::{Column, Connector, EntryKind, TreeLine, COLUMN_WIDTH};

mod error;
pub use error::{OwnedParseError, ParseError};

type Res<T, U> = IResult<T, U, VerboseError<T>>;

/// Parses the text of a listing, line by line
///
/// Blank lines are skipped. Each remaining line yields either the parsed [`TreeLine`] or a
/// [`ParseError`] describing why it could not be parsed; a malformed line does not stop
/// the lines after it from being parsed.
///
/// The first non-blank line is taken as the root line if it has no prefix or connector. The
/// depth of every other line is the width of its prefix divided by [`COLUMN_WIDTH`] (rounded
/// down), regardless of which glyphs make up the prefix.
pub fn parse_listing(text: &str) -> Listing<'_> {
    Listing {
        text,
        lines: text.lines().enumerate(),
        seen_first: false,
    }
}

/// An iterator over the parsed lines of a listing (see [`parse_listing`])
pub struct Listing<'t> {
    text: &'t str,
    lines: Enumerate<Lines<'t>>,
    seen_first: bool,
}

/// A successfully parsed line, together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'t> {
    /// The line number (starting at 1) within the listing
    pub line_number: usize,
    /// The text of the line, without its line ending
    pub text: &'t str,
    /// The parsed line
    pub tree_line: TreeLine,
}

impl<'t> Iterator for Listing<'t> {
    type Item = Result<SourceLine<'t>, ParseError<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;
            if line.trim().is_empty() {
                continue;
            }
            let first = !self.seen_first;
            self.seen_first = true;

            let parsed = match entry_line(line) {
                Ok((_, tree_line)) => Ok(tree_line),
                Err(err) => match (first, root_line(line)) {
                    (true, Ok((_, tree_line))) => Ok(tree_line),
                    _ => Err(self.error(line, err)),
                },
            };
            return Some(parsed.map(|tree_line| SourceLine {
                line_number: index + 1,
                text: line,
                tree_line,
            }));
        }
    }
}

impl<'t> Listing<'t> {
    fn error(&self, line: &'t str, err: nom::Err<VerboseError<&'t str>>) -> ParseError<'t> {
        let err = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => unreachable!("Complete parsers only"),
        };
        let span = err.errors.first().map(|(span, _)| *span).unwrap_or(line);
        let message = err
            .errors
            .iter()
            .find_map(|(_, kind)| match kind {
                VerboseErrorKind::Context("connector") => {
                    Some("Expected a connector (├─ or └─) after the prefix")
                }
                VerboseErrorKind::Context("name") => Some("Expected a valid entry name"),
                _ => None,
            })
            .or_else(|| {
                err.errors.iter().find_map(|(_, kind)| match kind {
                    VerboseErrorKind::Nom(ErrorKind::Eof) => {
                        Some("Unexpected text after the entry name")
                    }
                    _ => None,
                })
            })
            .unwrap_or("Invalid listing line");
        ParseError::new(message.into(), self.text, span)
    }
}

/// Characters that may make up the prefix of an entry line
fn is_prefix_char(c: char) -> bool {
    c == '│' || c == ' '
}

/// Characters that cannot begin the root line
fn is_glyph_char(c: char) -> bool {
    is_prefix_char(c) || c == '├' || c == '└' || c == '─'
}

/// Splits the prefix into whole columns, dropping any partial column at the end
fn columns(prefix: &str) -> Vec<Column> {
    let chars: Vec<char> = prefix.chars().collect();
    chars
        .chunks_exact(COLUMN_WIDTH)
        .map(|unit| {
            if unit.contains(&'│') {
                Column::Continuation
            } else {
                Column::Blank
            }
        })
        .collect()
}

fn prefix(s: &str) -> Res<&str, &str> {
    take_while(is_prefix_char)(s)
}

fn connector(s: &str) -> Res<&str, Connector> {
    context(
        "connector",
        alt((
            value(Connector::Middle, alt((tag("├─ "), tag("├── ")))),
            value(Connector::Last, alt((tag("└─ "), tag("└── ")))),
        )),
    )(s)
}

fn valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name != "." && name != ".."
}

// Names are kept verbatim, including any leading or trailing spaces
fn name(s: &str) -> Res<&str, &str> {
    context("name", verify(is_not("/"), valid_name))(s)
}

// Only whitespace may follow the slash of a directory
fn kind(s: &str) -> Res<&str, EntryKind> {
    map(opt(terminated(char('/'), space0)), |slash| match slash {
        Some(_) => EntryKind::Directory,
        None => EntryKind::File,
    })(s)
}

// │  ├─ name/
fn entry_line(s: &str) -> Res<&str, TreeLine> {
    map(
        all_consuming(tuple((prefix, connector, name, kind))),
        |(prefix, connector, name, kind)| TreeLine::entry(columns(prefix), connector, name, kind),
    )(s)
}

// name/
fn root_line(s: &str) -> Res<&str, TreeLine> {
    map(
        all_consuming(tuple((
            verify(name, |_: &str| !s.starts_with(is_glyph_char)),
            kind,
        ))),
        |(name, _)| TreeLine::root(name),
    )(s)
}

#[cfg(test)]
mod tests;
