//! Template directive rewriting.
//!
//! Templates reference build entrypoints with directives that are replaced by
//! the tags [`ViteResolver`] produces:
//!
//! ```html
//! <head>
//!   @viteReactRefresh
//!   @vite('src/main.tsx')
//!   @vite(['src/app.ts', 'src/app.css'], {"scriptTagAttributes": {"defer": true}})
//! </head>
//! ```
//!
//! # Passes
//!
//! 1. Every `@viteReactRefresh` becomes the React refresh preamble (empty in
//!    production).
//! 2. Every `@vite(...)` call that parses is replaced by the rendered tags,
//!    passed through [`PathResolver::to_public`](crate::host::PathResolver::to_public).
//!
//! Text that looks like a call but does not parse is left exactly as written
//! and logged at `warn`. `@vite` followed by anything other than whitespace and
//! `(` is ordinary text, so dev server URLs such as `/@vite/client` in the
//! output never match again and a second rewrite changes nothing.

mod lexer;
mod parser;

pub use lexer::{Lexer, Spanned, Token};
pub use parser::{DIRECTIVE, DirectiveMatch, is_directive_call, parse_directive};

use crate::core::ViteError;
use crate::resolver::ViteResolver;

/// Directive replaced by the React refresh preamble.
pub const REACT_REFRESH_DIRECTIVE: &str = "@viteReactRefresh";

/// Every `@vite(...)` call in `source`, parsed or not, in source order.
///
/// Occurrences of `@vite` that are not calls are not reported.
pub fn scan_directives(source: &str) -> Vec<Result<DirectiveMatch, ViteError>> {
    let mut results = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(DIRECTIVE) {
        let at = cursor + found;
        cursor = at + DIRECTIVE.len();

        if !is_directive_call(source, at) {
            continue;
        }

        let result = parse_directive(source, at);
        if let Ok(directive) = &result {
            cursor = directive.span.end;
        }
        results.push(result);
    }

    results
}

/// The directives in `source` that parse, in source order.
pub fn find_directives(source: &str) -> Vec<DirectiveMatch> {
    scan_directives(source).into_iter().filter_map(Result::ok).collect()
}

/// Rewrites directives in template text through a [`ViteResolver`].
#[derive(Debug, Clone, Copy)]
pub struct DirectiveRewriter<'r> {
    resolver: &'r ViteResolver,
}

impl<'r> DirectiveRewriter<'r> {
    pub const fn new(resolver: &'r ViteResolver) -> Self {
        Self {
            resolver,
        }
    }

    /// Rewrite every directive in `source`. Never fails.
    pub fn rewrite(&self, source: &str) -> String {
        let source = self.expand_react_refresh(source);

        let mut output = String::with_capacity(source.len());
        let mut copied = 0;
        let mut replaced = 0usize;

        for result in scan_directives(&source) {
            match result {
                Ok(directive) => {
                    output.push_str(&source[copied..directive.span.start]);
                    output.push_str(&self.render(&directive));
                    copied = directive.span.end;
                    replaced += 1;
                }
                Err(error) => {
                    tracing::warn!("Leaving malformed directive untouched: {}", error);
                }
            }
        }
        output.push_str(&source[copied..]);

        tracing::debug!("Rewrote {} directive(s)", replaced);
        output
    }

    fn expand_react_refresh(&self, source: &str) -> String {
        if source.contains(REACT_REFRESH_DIRECTIVE) {
            source.replace(REACT_REFRESH_DIRECTIVE, &self.resolver.react_refresh_preamble())
        } else {
            source.to_string()
        }
    }

    fn render(&self, directive: &DirectiveMatch) -> String {
        let html = self.resolver.render(&directive.entrypoints, &directive.options);
        if html.is_empty() {
            return html;
        }
        self.resolver.path_resolver().to_public(&html)
    }
}

/// Rewrite `source` with `resolver`.
pub fn rewrite(resolver: &ViteResolver, source: &str) -> String {
    DirectiveRewriter::new(resolver).rewrite(source)
}
