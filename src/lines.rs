//! Splitting a message into classified lines.

use std::iter::FusedIterator;

/// One line of a commit message.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineToken<'a> {
    /// A line with visible text, without its line break.
    Content {
        /// The line text.
        text: &'a str,
        /// The line number.
        line: usize,
    },
    /// An empty or whitespace-only line.
    Blank {
        /// The line number.
        line: usize,
    },
    /// Marks the end of the message, one line past the last logical line.
    End {
        /// The line number.
        line: usize,
    },
}

impl<'a> LineToken<'a> {
    /// The 1-based line number of the token.
    pub const fn line_number(&self) -> usize {
        match *self {
            LineToken::Content { line, .. } | LineToken::Blank { line } | LineToken::End { line } => {
                line
            }
        }
    }

    /// The text of a `Content` token.
    pub const fn text(&self) -> Option<&'a str> {
        match *self {
            LineToken::Content { text, .. } => Some(text),
            LineToken::Blank { .. } | LineToken::End { .. } => None,
        }
    }

    /// Whether this is a `Blank` token.
    pub const fn is_blank(&self) -> bool {
        matches!(self, LineToken::Blank { .. })
    }

    /// Whether this is the `End` token.
    pub const fn is_end(&self) -> bool {
        matches!(self, LineToken::End { .. })
    }
}

/// Lazily splits a message into [`LineToken`]s.
///
/// Both `\n` and `\r\n` end a line. The last line does not need a line break.
/// Exactly one [`LineToken::End`] is produced, after which the iterator is
/// exhausted.
///
/// ```rust
/// use conventional_message::{LineToken, LineTokenizer};
///
/// let tokens: Vec<_> = LineTokenizer::new("Line1\r\n\r\nLine2").collect();
/// assert_eq!(
///     tokens,
///     [
///         LineToken::Content { text: "Line1", line: 1 },
///         LineToken::Blank { line: 2 },
///         LineToken::Content { text: "Line2", line: 3 },
///         LineToken::End { line: 4 },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LineTokenizer<'a> {
    remaining: &'a str,
    line: usize,
    finished: bool,
}

impl<'a> LineTokenizer<'a> {
    /// Start tokenizing `message`.
    pub fn new(message: &'a str) -> Self {
        Self {
            remaining: message,
            line: 1,
            finished: false,
        }
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = LineToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.remaining.is_empty() {
            self.finished = true;
            return Some(LineToken::End { line: self.line });
        }

        let text = match self.remaining.find('\n') {
            Some(end) => {
                let text = &self.remaining[..end];
                self.remaining = &self.remaining[end + 1..];
                text.strip_suffix('\r').unwrap_or(text)
            }
            None => std::mem::take(&mut self.remaining),
        };

        let line = self.line;
        self.line += 1;

        if text.trim().is_empty() {
            Some(LineToken::Blank { line })
        } else {
            Some(LineToken::Content { text, line })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            // At least the `End` token, at most one token per byte plus `End`.
            (1, Some(self.remaining.len() + 1))
        }
    }
}

impl FusedIterator for LineTokenizer<'_> {}
