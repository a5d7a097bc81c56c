//! Turning commit history into changelog-ready commits.

use tracing::{debug, instrument};

use crate::{CommitType, Footer, ParsedMessage};

/// A parsed message with its breaking changes separated out.
///
/// A commit is breaking when its header carries `!` or any footer is named
/// `BREAKING CHANGE` (or `breaking-change` in any casing).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConventionalCommit {
    message: ParsedMessage,
}

impl ConventionalCommit {
    /// Wrap a parsed message.
    pub fn new(message: ParsedMessage) -> Self {
        Self { message }
    }

    /// The underlying message.
    pub fn message(&self) -> &ParsedMessage {
        &self.message
    }

    /// The type of the commit.
    pub fn type_(&self) -> &CommitType {
        self.message.header().type_()
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<&str> {
        self.message.header().scope()
    }

    /// The commit description.
    pub fn description(&self) -> &str {
        self.message.header().description()
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the commit has an exclamation mark after
    /// the message type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when the `BREAKING CHANGE: ` footer is defined:
    /// ```text
    /// feat: my commit description
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn is_breaking(&self) -> bool {
        self.message.header().is_breaking_change() || self.breaking_footers().next().is_some()
    }

    /// Explanations for the breaking changes.
    ///
    /// Note: if no `BREAKING CHANGE` footer is provided, the description is
    /// expected to describe the breaking change.
    pub fn breaking_change_descriptions(&self) -> Vec<&str> {
        let descriptions: Vec<_> = self.breaking_footers().map(Footer::value).collect();
        if descriptions.is_empty() && self.message.header().is_breaking_change() {
            vec![self.description()]
        } else {
            descriptions
        }
    }

    /// Footers other than the breaking change ones, in order.
    pub fn footers(&self) -> impl Iterator<Item = &Footer> {
        self.message.footers().iter().filter(|f| !f.breaking())
    }

    fn breaking_footers(&self) -> impl Iterator<Item = &Footer> {
        self.message.footers().iter().filter(|f| f.breaking())
    }
}

impl From<ParsedMessage> for ConventionalCommit {
    fn from(message: ParsedMessage) -> Self {
        Self::new(message)
    }
}

/// Parse each message of a commit history, skipping the ones that are not
/// Conventional Commits.
///
/// A rejected message is logged at `debug` level and never stops the
/// remaining messages from being parsed.
#[instrument(skip_all)]
pub fn parse_messages<'m, I>(messages: I) -> Vec<ConventionalCommit>
where
    I: IntoIterator<Item = &'m str>,
{
    let mut total = 0usize;
    let commits: Vec<_> = messages
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(|message| match ParsedMessage::parse(message) {
            Ok(parsed) => Some(ConventionalCommit::new(parsed)),
            Err(err) => {
                debug!(
                    kind = ?err.kind(),
                    header = message.lines().next().unwrap_or_default(),
                    "skipping non-conventional commit: {err}"
                );
                None
            }
        })
        .collect();

    debug!(
        total,
        parsed = commits.len(),
        skipped = total - commits.len(),
        "parsed commit history"
    );
    commits
}
