//! Tokenizer for directive arguments.
//!
//! The lexer walks the text after `@vite` one token at a time. It never looks
//! past the token it returns, so the parser decides where a directive ends and
//! everything after it stays untouched template text.

use crate::core::ViteError;

/// A lexical token borrowed from the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    /// Contents of a `'...'` or `"..."` literal, without the quotes.
    Str(&'a str),
    /// A brace-balanced `{...}` block, braces included.
    Object(&'a str),
}

impl Token<'_> {
    /// Short form for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Str(text) => format!("string '{text}'"),
            Self::Object(_) => "options object".to_string(),
        }
    }
}

/// A token and its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub end: usize,
}

/// Pull-based tokenizer over `source`, starting at a byte offset.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub const fn new(source: &'a str, pos: usize) -> Self {
        Self {
            source,
            pos,
        }
    }

    /// Byte offset of the next unread character.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The next token, or `None` at end of input. Whitespace between tokens,
    /// including full-width spaces, is skipped.
    pub fn next_token(&mut self) -> Result<Option<Spanned<'a>>, ViteError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(c) = self.rest().chars().next() else {
            return Ok(None);
        };

        let token = match c {
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            ',' => self.single(Token::Comma),
            '\'' | '"' => self.string(c)?,
            '{' => self.object()?,
            other => {
                return Err(malformed(start, format!("unexpected character '{other}'")));
            }
        };

        Ok(Some(Spanned {
            token,
            start,
            end: self.pos,
        }))
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn single(&mut self, token: Token<'a>) -> Token<'a> {
        self.pos += 1;
        token
    }

    fn string(&mut self, quote: char) -> Result<Token<'a>, ViteError> {
        let start = self.pos;
        let body = &self.source[start + 1..];
        let Some(len) = body.find(quote) else {
            return Err(malformed(start, "unterminated string literal"));
        };
        self.pos = start + 1 + len + 1;
        Ok(Token::Str(&body[..len]))
    }

    fn object(&mut self) -> Result<Token<'a>, ViteError> {
        let start = self.pos;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, c) in self.rest().char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos = start + offset + 1;
                        return Ok(Token::Object(&self.source[start..self.pos]));
                    }
                }
                _ => {}
            }
        }

        Err(malformed(start, "unbalanced braces in options"))
    }
}

pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> ViteError {
    ViteError::MalformedDirective {
        offset,
        reason: reason.into(),
    }
}
