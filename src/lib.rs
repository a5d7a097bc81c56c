//! A tokenizer and parser turning [Conventional Commit] messages into
//! changelog-ready records.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use conventional_message::{CommitType, FooterName, ParsedMessage};
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     docs(example)!: add tested usage example
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     A second paragraph.
//!
//!     BREAKING CHANGE: Going from nothing to something, meaning anyone doing
//!       nothing before suddenly has something to do.
//!     Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>
//!     Closes #12
//! ");
//!
//! let message = ParsedMessage::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! let header = message.header();
//! assert_eq!(header.type_(), &CommitType::DOCS);
//! assert_eq!(header.scope(), Some("example"));
//! assert_eq!(header.description(), "add tested usage example");
//! assert!(header.is_breaking_change());
//!
//! // The body is split into paragraphs.
//! assert_eq!(message.body().len(), 2);
//! assert!(message.body()[0].contains("helps people understand"));
//!
//! // Footers keep their order; continuation lines are part of the value.
//! assert_eq!(message.footers()[0].name(), &FooterName::BREAKING_CHANGE);
//! assert!(message.footers()[0].value().ends_with("has something to do."));
//! assert_eq!(message.footers()[1].name().as_str(), "Co-Authored-By");
//!
//! // Two types of separators are supported, regular ": ", and " #":
//! assert_eq!(message.footers()[2].separator(), " #");
//! assert_eq!(message.footers()[2].value(), "12");
//! ```
//!
//! Messages that are not Conventional Commits are rejected as a whole:
//!
//! ```rust
//! use conventional_message::ParsedMessage;
//!
//! let err = ParsedMessage::parse("Merge branch 'main'").unwrap_err();
//! assert!(err.is_header_error());
//! ```

#![warn(missing_docs)]

mod component;
mod error;
pub mod history;
mod lines;
mod message;
mod parser;

pub use component::{CommitType, FooterName, FooterSeparator};
pub use error::{Error, ErrorKind};
pub use lines::{LineToken, LineTokenizer};
pub use message::{Footer, ParsedHeader, ParsedMessage};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
