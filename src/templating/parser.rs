//! Recursive-descent parser for a single `@vite(...)` call.
//!
//! ```text
//! directive := "@vite" WS* "(" entry ( "," OBJECT )? ")" ";"?
//! entry     := STR | "[" STR ( "," STR )* "]"
//! ```

use serde::Serialize;
use std::ops::Range;

use super::lexer::{Lexer, Spanned, Token, malformed};
use crate::core::ViteError;
use crate::resolver::TagOptions;

/// Directive keyword.
pub const DIRECTIVE: &str = "@vite";

/// One directive found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveMatch {
    /// The directive exactly as written, including a trailing `;`.
    pub raw_text: String,
    /// Byte range of `raw_text` in the source.
    pub span: Range<usize>,
    /// Entrypoint names, unquoted and trimmed, in written order.
    pub entrypoints: Vec<String>,
    pub options: TagOptions,
}

/// Whether the `@vite` at byte `at` starts a call, i.e. is followed by
/// optional whitespace and `(`.
///
/// `@viteFoo`, `@vite/client`, and a bare `@vite` are ordinary text.
#[must_use]
pub fn is_directive_call(source: &str, at: usize) -> bool {
    source
        .get(at..)
        .and_then(|rest| rest.strip_prefix(DIRECTIVE))
        .is_some_and(|rest| rest.trim_start().starts_with('('))
}

/// Parse the directive beginning at byte `at`.
///
/// # Errors
///
/// Returns [`ViteError::MalformedDirective`] with the offset of the offending
/// token when the text does not follow the directive grammar or the options
/// object is not valid [`TagOptions`] JSON.
pub fn parse_directive(source: &str, at: usize) -> Result<DirectiveMatch, ViteError> {
    if !is_directive_call(source, at) {
        return Err(malformed(at, "expected '@vite('"));
    }

    let mut parser = Parser {
        source,
        lexer: Lexer::new(source, at + DIRECTIVE.len()),
    };

    parser.expect(&Token::LParen)?;
    let entrypoints = parser.entry()?;

    let options = match parser.next()? {
        Spanned {
            token: Token::RParen,
            ..
        } => TagOptions::default(),
        Spanned {
            token: Token::Comma,
            ..
        } => {
            let options = parser.options()?;
            parser.expect(&Token::RParen)?;
            options
        }
        other => return Err(unexpected(&other, "',' or ')'")),
    };

    let mut end = parser.lexer.position();
    if source[end..].starts_with(';') {
        end += 1;
    }

    Ok(DirectiveMatch {
        raw_text: source[at..end].to_string(),
        span: at..end,
        entrypoints,
        options,
    })
}

struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Result<Spanned<'a>, ViteError> {
        self.lexer
            .next_token()?
            .ok_or_else(|| malformed(self.source.len(), "unexpected end of template"))
    }

    fn expect(&mut self, expected: &Token<'_>) -> Result<(), ViteError> {
        let spanned = self.next()?;
        if spanned.token == *expected {
            Ok(())
        } else {
            Err(unexpected(&spanned, &expected.describe()))
        }
    }

    fn entry(&mut self) -> Result<Vec<String>, ViteError> {
        let spanned = self.next()?;
        match spanned.token {
            Token::Str(name) => Ok(vec![entrypoint(name, spanned.start)?]),
            Token::LBracket => {
                let mut names = vec![self.string()?];
                loop {
                    let spanned = self.next()?;
                    match spanned.token {
                        Token::Comma => names.push(self.string()?),
                        Token::RBracket => return Ok(names),
                        _ => return Err(unexpected(&spanned, "',' or ']'")),
                    }
                }
            }
            _ => Err(unexpected(&spanned, "an entrypoint string or '['")),
        }
    }

    fn string(&mut self) -> Result<String, ViteError> {
        let spanned = self.next()?;
        match spanned.token {
            Token::Str(name) => entrypoint(name, spanned.start),
            _ => Err(unexpected(&spanned, "an entrypoint string")),
        }
    }

    fn options(&mut self) -> Result<TagOptions, ViteError> {
        let spanned = self.next()?;
        match spanned.token {
            Token::Object(json) => TagOptions::from_json(json)
                .map_err(|e| malformed(spanned.start, format!("invalid options: {e}"))),
            _ => Err(unexpected(&spanned, "an options object")),
        }
    }
}

fn entrypoint(name: &str, offset: usize) -> Result<String, ViteError> {
    let name = name.trim().trim_matches(['\'', '"']);
    if name.is_empty() {
        return Err(malformed(offset, "empty entrypoint name"));
    }
    Ok(name.to_string())
}

fn unexpected(spanned: &Spanned<'_>, expected: &str) -> ViteError {
    malformed(spanned.start, format!("expected {expected}, found {}", spanned.token.describe()))
}
