//! The parsed commit message and the parser that assembles it.

use std::fmt;
use std::str::FromStr;

use crate::lines::{LineToken, LineTokenizer};
use crate::parser::{parse_footer, parse_header};
use crate::{CommitType, Error, ErrorKind, FooterName, FooterSeparator};

/// The first line of a commit message: `type(scope)!: description`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedHeader {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: CommitType,
    scope: Option<String>,
    breaking: bool,
    description: String,
}

impl ParsedHeader {
    /// Piece together a header.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingDescription`] for a blank description and
    /// [`ErrorKind::InvalidScope`] for a blank scope.
    pub fn new(
        ty: CommitType,
        scope: Option<String>,
        breaking: bool,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(Error::new(ErrorKind::MissingDescription).set_context(description));
        }
        if let Some(scope) = scope.as_deref().filter(|s| s.trim().is_empty()) {
            return Err(Error::new(ErrorKind::InvalidScope).set_context(scope));
        }

        Ok(Self {
            ty,
            scope,
            breaking,
            description,
        })
    }

    /// The type of the commit.
    pub fn type_(&self) -> &CommitType {
        &self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Whether the header carries the `!` marker.
    ///
    /// A `BREAKING CHANGE` footer does not affect this flag.
    pub fn is_breaking_change(&self) -> bool {
        self.breaking
    }

    /// The commit description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ParsedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.as_str())?;

        if let Some(scope) = &self.scope {
            write!(f, "({scope})")?;
        }

        if self.breaking {
            f.write_str("!")?;
        }

        write!(f, ": {}", self.description)
    }
}

/// A single footer.
///
/// A footer is similar to a Git trailer, with the exception of not requiring
/// whitespace before newlines.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Footer {
    name: FooterName,
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    sep: FooterSeparator,
    value: String,
}

impl Footer {
    /// Piece together a footer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFooterValue`] when `value` is blank.
    pub fn new(
        name: FooterName,
        sep: FooterSeparator,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidFooterValue).set_context(name.as_str()));
        }
        Ok(Self { name, sep, value })
    }

    /// The name of the footer.
    pub fn name(&self) -> &FooterName {
        &self.name
    }

    /// The separator between the footer name and its value.
    pub fn separator(&self) -> FooterSeparator {
        self.sep
    }

    /// The value of the footer.
    ///
    /// Continuation lines are joined with `\n`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.name.breaking()
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.sep)?;

        // Continuation lines are indented so none of them reads as a new footer.
        let mut lines = self.value.lines();
        if let Some(first) = lines.next() {
            f.write_str(first)?;
        }
        for line in lines {
            write!(f, "\n  {line}")?;
        }

        Ok(())
    }
}

/// A commit message following the Conventional Commits convention.
///
/// Produced by [`ParsedMessage::parse`] and immutable afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedMessage {
    header: ParsedHeader,
    body: Vec<String>,
    footers: Vec<Footer>,
}

impl ParsedMessage {
    /// Piece together a message from already validated parts.
    pub fn new(header: ParsedHeader, body: Vec<String>, footers: Vec<Footer>) -> Self {
        Self {
            header,
            body,
            footers,
        }
    }

    /// Parse a raw commit message.
    ///
    /// # Errors
    ///
    /// This function returns an error if the first line is not a
    /// Conventional Commit header. The whole message is rejected in that case;
    /// a malformed footer block is never an error and is kept as body text.
    pub fn parse(message: &str) -> Result<Self, Error> {
        let mut tokens = LineTokenizer::new(message).peekable();

        let header = match tokens.next() {
            Some(LineToken::Content { text, .. }) => text,
            _ => "",
        };
        let (ty, scope, breaking, description) = parse_header(header)?;
        let header = ParsedHeader::new(
            CommitType::new(ty)?,
            scope.map(str::to_owned),
            breaking,
            description,
        )?;

        // One blank line separates the header from the rest.
        tokens.next_if(LineToken::is_blank);

        let mut rest: Vec<_> = tokens.take_while(|t| !t.is_end()).collect();
        while rest.last().is_some_and(LineToken::is_blank) {
            rest.pop();
        }

        let footer_start = footer_block_start(&rest);
        let (body, trailer) = rest.split_at(footer_start.unwrap_or(rest.len()));

        let body = paragraphs(body);
        let footers = footers(trailer)?;
        tracing::trace!(
            paragraphs = body.len(),
            footers = footers.len(),
            "parsed commit message"
        );

        Ok(Self::new(header, body, footers))
    }

    /// The first line of the message.
    pub fn header(&self) -> &ParsedHeader {
        &self.header
    }

    /// The body paragraphs, in order.
    ///
    /// Lines within a paragraph are joined with `\n`.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// The footers, in the order they appear.
    ///
    /// Footers with the same name are all kept.
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }
}

impl FromStr for ParsedMessage {
    type Err = Error;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        Self::parse(message)
    }
}

/// Writes the header, the body paragraphs and the footer block, each
/// separated by a blank line.
///
/// Parsing the output gives back an equal message, with one exception: a
/// message without footers whose last paragraph starts with a footer line is
/// read back with that paragraph as its footer block.
impl fmt::Display for ParsedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;

        for paragraph in &self.body {
            write!(f, "\n\n{paragraph}")?;
        }

        for (i, footer) in self.footers.iter().enumerate() {
            let sep = if i == 0 { "\n\n" } else { "\n" };
            write!(f, "{sep}{footer}")?;
        }

        Ok(())
    }
}

/// Index of the first line of the trailing footer block, if any.
///
/// Only the last paragraph may hold footers, and only when its first line is
/// a footer line.
fn footer_block_start(lines: &[LineToken<'_>]) -> Option<usize> {
    let start = lines
        .iter()
        .rposition(LineToken::is_blank)
        .map_or(0, |blank| blank + 1);

    let first = lines.get(start)?.text()?;
    if parse_footer(first).is_some() {
        Some(start)
    } else {
        tracing::trace!(
            line = lines[start].line_number(),
            "last paragraph does not start with a footer"
        );
        None
    }
}

fn paragraphs(lines: &[LineToken<'_>]) -> Vec<String> {
    lines
        .split(LineToken::is_blank)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            paragraph
                .iter()
                .filter_map(LineToken::text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}

fn footers(lines: &[LineToken<'_>]) -> Result<Vec<Footer>, Error> {
    let mut parts: Vec<(&str, &str, String)> = Vec::new();
    for text in lines.iter().filter_map(LineToken::text) {
        if let Some((name, sep, value)) = parse_footer(text) {
            parts.push((name, sep, value.to_owned()));
        } else if let Some((_, _, value)) = parts.last_mut() {
            value.push('\n');
            value.push_str(text.trim());
        }
    }

    parts
        .into_iter()
        .map(|(name, sep, value)| Footer::new(FooterName::new(name)?, sep.parse()?, value))
        .collect()
}
