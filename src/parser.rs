//! Line-level grammars for the header and for footer lines.

use winnow::combinator::{alt, cut_err, delimited, opt};
use winnow::error::StrContext;
use winnow::token::{rest, take_while};
use winnow::{ModalResult, Parser};

use crate::Error;

/// `(type, scope, breaking, description)`
pub(crate) type HeaderDetails<'a> = (&'a str, Option<&'a str>, bool, &'a str);

/// `(token, separator, value)`
pub(crate) type FooterDetails<'a> = (&'a str, &'a str, &'a str);

pub(crate) const BREAKING_PHRASE: &str = "BREAKING CHANGE";

/// Parse one line as a Conventional Commit header.
pub(crate) fn parse_header(line: &str) -> Result<HeaderDetails<'_>, Error> {
    header
        .parse(line)
        .map_err(|err| Error::with_winnow(line, err.inner()))
}

/// Parse one line as a footer, `None` when the line is not a footer.
pub(crate) fn parse_footer(line: &str) -> Option<FooterDetails<'_>> {
    footer.parse(line).ok()
}

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <parens>          ::= "(" | ")"
fn is_parens(c: char) -> bool {
    c == '(' || c == ')'
}

// <header>          ::= <type>, ["(", <scope>, ")"], ["!"], ": ", <description>
fn header<'i>(i: &mut &'i str) -> ModalResult<HeaderDetails<'i>> {
    (
        type_,
        opt(delimited(
            '(',
            cut_err(scope),
            cut_err(')').context(StrContext::Label(SCOPE)),
        )),
        opt('!').map(|b| b.is_some()),
        cut_err(": ").context(StrContext::Label(SEPARATOR)),
        cut_err(description),
    )
        .map(|(ty, scope, breaking, _, description)| (ty, scope, breaking, description))
        .parse_next(i)
}

// <type>            ::= <any char except newline or parens or ":" or "!" or whitespace>+
pub(crate) fn type_<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !is_line_ending(c) && !is_parens(c) && c != ':' && c != '!' && !c.is_whitespace()
    })
    .context(StrContext::Label(TYPE))
    .parse_next(i)
}

pub(crate) const TYPE: &str = "type";

// <scope>           ::= <any char except newline or parens>+
fn scope<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_line_ending(c) && !is_parens(c))
        .context(StrContext::Label(SCOPE))
        .parse_next(i)
}

pub(crate) const SCOPE: &str = "scope";

pub(crate) const SEPARATOR: &str = "separator";

// <description>     ::= <any char except newline>+, not only whitespace
fn description<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    rest.verify(|d: &str| !d.trim().is_empty())
        .map(str::trim)
        .context(StrContext::Label(DESCRIPTION))
        .parse_next(i)
}

pub(crate) const DESCRIPTION: &str = "description";

// <footer>          ::= <token>, <separator>, <value>
fn footer<'i>(i: &mut &'i str) -> ModalResult<FooterDetails<'i>> {
    (token, footer_separator, value).parse_next(i)
}

// <token>           ::= "BREAKING CHANGE"
//                    |  <word>
// <word>            ::= (<alphanumeric> | "-" | "_")+
pub(crate) fn token<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    alt((
        BREAKING_PHRASE,
        take_while(1.., |c: char| c.is_alphanumeric() || c == '-' || c == '_'),
    ))
    .context(StrContext::Label(TOKEN))
    .parse_next(i)
}

pub(crate) const TOKEN: &str = "token";

// <separator>       ::= ": " | " #"
fn footer_separator<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    alt((": ", " #")).parse_next(i)
}

// <value>           ::= <any char except newline>+, not only whitespace
fn value<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    rest.verify(|v: &str| !v.trim().is_empty())
        .map(str::trim)
        .parse_next(i)
}
