//! Case-insensitive identifiers of a commit message.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use unicase::UniCase;
use winnow::Parser;

use crate::parser::BREAKING_PHRASE;
use crate::{Error, ErrorKind};

const BREAKING_TOKEN: &str = "breaking-change";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            impl $ty {
                /// Wrap a `'static` value without validating it.
                ///
                /// Meant for constants; see `new` for validated construction.
                pub const fn new_unchecked(value: &'static str) -> Self {
                    $ty(UniCase::unicode(Cow::Borrowed(value)))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &str {
                    self.0.as_ref()
                }
            }

            impl Deref for $ty {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty(UniCase::unicode(Cow::Owned((*other).to_owned())))
                }
            }

            impl PartialEq<str> for $ty {
                fn eq(&self, other: &str) -> bool {
                    self == &other
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = Error;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    $ty::new(value)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = Error;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    $ty::new(value)
                }
            }

            impl TryFrom<&str> for $ty {
                type Error = Error;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    $ty::new(value)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }

            #[cfg(feature = "schemars")]
            impl schemars::JsonSchema for $ty {
                fn schema_name() -> Cow<'static, str> {
                    stringify!($ty).into()
                }

                fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
                    <String as schemars::JsonSchema>::json_schema(generator)
                }
            }
        )+
    )
}

/// The type of a commit, e.g. `feat` or `fix`.
///
/// Compared case-insensitively: `feat` and `FEAT` are the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitType(UniCase<Cow<'static, str>>);

impl CommitType {
    /// Build a commit type, rejecting blank text.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidType`] when `value` is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if is_blank(&value) {
            return Err(Error::new(ErrorKind::InvalidType).set_context(value));
        }
        Ok(CommitType(UniCase::unicode(Cow::Owned(value))))
    }

    /// Parse a `str` into a `CommitType`, accepting only what a header's
    /// type may contain.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidType`] when `value` contains whitespace,
    /// parentheses, `:` or `!`, or is empty.
    pub fn parse(value: &str) -> Result<Self, Error> {
        crate::parser::type_
            .parse(value)
            .map_err(|_| Error::new(ErrorKind::InvalidType).set_context(value))?;
        CommitType::new(value)
    }
}

/// Common commit types
impl CommitType {
    /// Commit type when introducing new features (correlates with `minor` in semver)
    pub const FEAT: CommitType = CommitType::new_unchecked("feat");
    /// Commit type when patching a bug (correlates with `patch` in semver)
    pub const FIX: CommitType = CommitType::new_unchecked("fix");
    /// Possible commit type when reverting changes.
    pub const REVERT: CommitType = CommitType::new_unchecked("revert");
    /// Possible commit type for changing documentation.
    pub const DOCS: CommitType = CommitType::new_unchecked("docs");
    /// Possible commit type for changing code style.
    pub const STYLE: CommitType = CommitType::new_unchecked("style");
    /// Possible commit type for refactoring code structure.
    pub const REFACTOR: CommitType = CommitType::new_unchecked("refactor");
    /// Possible commit type for performance optimizations.
    pub const PERF: CommitType = CommitType::new_unchecked("perf");
    /// Possible commit type for addressing tests.
    pub const TEST: CommitType = CommitType::new_unchecked("test");
    /// Possible commit type for build system changes.
    pub const BUILD: CommitType = CommitType::new_unchecked("build");
    /// Possible commit type for continuous integration changes.
    pub const CI: CommitType = CommitType::new_unchecked("ci");
    /// Possible commit type for other things.
    pub const CHORE: CommitType = CommitType::new_unchecked("chore");
}

/// The name of a footer, e.g. `Closes` or `BREAKING CHANGE`.
///
/// Compared case-insensitively, except that the exact phrase
/// `BREAKING CHANGE` is also equal to `breaking-change` in any casing. Any
/// other spelling with a space, like `Breaking Change`, is not.
///
/// ```rust
/// use conventional_message::FooterName;
///
/// let phrase = FooterName::BREAKING_CHANGE;
/// assert_eq!(phrase, FooterName::new("Breaking-Change").unwrap());
/// assert_ne!(phrase, FooterName::new("Breaking Change").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FooterName(UniCase<Cow<'static, str>>);

impl FooterName {
    /// The footer marking a breaking change.
    pub const BREAKING_CHANGE: FooterName = FooterName::new_unchecked(BREAKING_PHRASE);

    /// Build a footer name, rejecting blank text.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFooterName`] when `value` is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if is_blank(&value) {
            return Err(Error::new(ErrorKind::InvalidFooterName).set_context(value));
        }
        Ok(FooterName(UniCase::unicode(Cow::Owned(value))))
    }

    /// Parse a `str` into a `FooterName`, accepting only what a footer line's
    /// token may contain.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFooterName`] when `value` is neither
    /// `BREAKING CHANGE` nor a single word of letters, digits, `-` and `_`.
    pub fn parse(value: &str) -> Result<Self, Error> {
        crate::parser::token
            .parse(value)
            .map_err(|_| Error::new(ErrorKind::InvalidFooterName).set_context(value))?;
        FooterName::new(value)
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        *self == FooterName::BREAKING_CHANGE
    }

    // Rule table for the one spelling that folds onto another key:
    //
    // | spelling                         | key               |
    // |----------------------------------|-------------------|
    // | `BREAKING CHANGE` (exact)        | `breaking-change` |
    // | anything else                    | itself            |
    //
    // Keys then compare case-insensitively.
    fn key(&self) -> UniCase<&str> {
        let value: &str = self.0.as_ref();
        if value == BREAKING_PHRASE {
            UniCase::unicode(BREAKING_TOKEN)
        } else {
            UniCase::unicode(value)
        }
    }
}

impl PartialEq for FooterName {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FooterName {}

impl Hash for FooterName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for FooterName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FooterName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

unicase_components![CommitType, FooterName];

/// The type of separator between the footer name and value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FooterSeparator {
    /// ": "
    Value,

    /// " #"
    Ref,
}

impl FooterSeparator {
    /// Access `str` representation of FooterSeparator
    pub fn as_str(self) -> &'static str {
        match self {
            FooterSeparator::Value => ": ",
            FooterSeparator::Ref => " #",
        }
    }
}

impl Deref for FooterSeparator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for FooterSeparator {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for FooterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FromStr for FooterSeparator {
    type Err = Error;

    fn from_str(sep: &str) -> Result<Self, Self::Err> {
        match sep {
            ": " => Ok(FooterSeparator::Value),
            " #" => Ok(FooterSeparator::Ref),
            _ => Err(Error::new(ErrorKind::InvalidFooterSeparator).set_context(format!("{sep:?}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn name(value: &str) -> FooterName {
        FooterName::new(value).unwrap()
    }

    fn ty(value: &str) -> CommitType {
        CommitType::new(value).unwrap()
    }

    #[test]
    fn commit_type_is_case_insensitive() {
        assert_eq!(ty("feat"), ty("FEAT"));
        assert_eq!(ty("Feat"), CommitType::FEAT);
        assert_eq!(CommitType::FIX, "Fix");
        assert_ne!(ty("feat"), ty("fix"));
        assert_eq!(ty("FEAT").as_str(), "FEAT");
    }

    #[test]
    fn commit_type_rejects_blank() {
        for value in ["", " ", "   ", "\t\n"] {
            let err = CommitType::new(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);
        }
    }

    #[test]
    fn commit_type_parse_follows_header_grammar() {
        assert_eq!(CommitType::parse("feat").unwrap(), CommitType::FEAT);
        assert!(CommitType::parse("feat ").is_err());
        assert!(CommitType::parse("fe at").is_err());
        assert!(CommitType::parse("feat!").is_err());
        assert!(CommitType::parse("feat(x)").is_err());
        assert!(CommitType::parse("").is_err());
    }

    #[test]
    fn commit_type_hash_matches_eq() {
        let types: HashSet<_> = [ty("feat"), ty("FEAT"), ty("Feat"), ty("fix")]
            .into_iter()
            .collect();
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn footer_name_equality_matrix() {
        assert_eq!(name("fixes"), name("Fixes"));
        assert_eq!(name("breaking-change"), name("BREAKING CHANGE"));
        assert_eq!(name("BREAKING CHANGE"), name("breaking-change"));
        assert_eq!(name("BREAKING-CHANGE"), name("BREAKING CHANGE"));
        assert_eq!(name("Breaking-Change"), FooterName::BREAKING_CHANGE);
        assert_eq!(name("BREAKING CHANGE"), name("BREAKING CHANGE"));
        assert_ne!(name("breaking-change"), name("Breaking Change"));
        assert_ne!(name("breaking-change"), name("breaking change"));
        assert_ne!(name("BREAKING CHANGE"), name("Breaking Change"));
        assert_ne!(name("fixes"), name("closes"));
    }

    #[test]
    fn footer_name_space_spellings_compare_case_insensitively() {
        // Only the hyphenated key is folded onto; space spellings other than
        // the exact phrase still compare among themselves as usual.
        assert_eq!(name("Breaking Change"), name("breaking change"));
        assert_ne!(name("Some Key"), name("some-key"));
    }

    #[test]
    fn footer_name_hash_matches_eq() {
        let names: HashSet<_> = [
            name("BREAKING CHANGE"),
            name("breaking-change"),
            name("Breaking-Change"),
            name("Breaking Change"),
            name("Fixes"),
            name("fixes"),
        ]
        .into_iter()
        .collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn footer_name_keeps_spelling() {
        assert_eq!(name("Co-Authored-By").as_str(), "Co-Authored-By");
        assert_eq!(name("BREAKING CHANGE").to_string(), "BREAKING CHANGE");
    }

    #[test]
    fn footer_name_breaking() {
        assert!(FooterName::BREAKING_CHANGE.breaking());
        assert!(name("breaking-change").breaking());
        assert!(!name("Breaking Change").breaking());
        assert!(!name("Fixes").breaking());
    }

    #[test]
    fn footer_name_rejects_blank() {
        for value in ["", " ", "\t"] {
            let err = FooterName::new(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFooterName);
        }
    }

    #[test]
    fn footer_name_parse_follows_footer_grammar() {
        assert_eq!(FooterName::parse("BREAKING CHANGE").unwrap(), FooterName::BREAKING_CHANGE);
        assert_eq!(FooterName::parse("Co-Authored-By").unwrap(), "co-authored-by");
        assert!(FooterName::parse("Breaking Change").is_err());
        assert!(FooterName::parse("Fixes:").is_err());
        assert!(FooterName::parse("").is_err());
    }

    #[test]
    fn footer_separator() {
        assert_eq!(": ".parse::<FooterSeparator>().unwrap(), FooterSeparator::Value);
        assert_eq!(" #".parse::<FooterSeparator>().unwrap(), FooterSeparator::Ref);
        let err = ":".parse::<FooterSeparator>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFooterSeparator);
        assert_eq!(FooterSeparator::Ref, " #");
    }
}
