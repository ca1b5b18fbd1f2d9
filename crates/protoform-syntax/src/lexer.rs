//! Flat lexical tokenizer used by the signature and class scanners.
//!
//! The tokenizer has no notion of comments or string literals. A `func` or
//! `class` word inside either is tokenized like any other word, so the
//! scanners built on top of it match there too.

use std::ops::Range;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Maximal run of ASCII alphanumerics and underscores.
    Word,
    /// Maximal run of spaces and tabs.
    Space,
    /// A single `\n`.
    Newline,
    /// Any other single character.
    Punct(char),
}

/// A token and the byte range it covers in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    span: Range<usize>,
}

impl<'a> Token<'a> {
    pub(crate) const fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) const fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) const fn start(&self) -> usize {
        self.span.start
    }

    pub(crate) const fn end(&self) -> usize {
        self.span.end
    }

    /// Returns `true` when the token is the given word.
    pub(crate) fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }

    pub(crate) fn is_punct(&self, expected: char) -> bool {
        self.kind == TokenKind::Punct(expected)
    }

    /// Returns `true` for spaces, tabs and newlines.
    pub(crate) const fn is_blank(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Newline)
    }
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

const fn is_space_char(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn classify(ch: char) -> TokenKind {
    if is_word_char(ch) {
        TokenKind::Word
    } else if is_space_char(ch) {
        TokenKind::Space
    } else if ch == '\n' {
        TokenKind::Newline
    } else {
        TokenKind::Punct(ch)
    }
}

/// Splits `text` into a flat token stream.
///
/// Concatenating the text of every token reproduces `text` exactly.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let kind = classify(ch);
        let mut end = start + ch.len_utf8();

        if matches!(kind, TokenKind::Word | TokenKind::Space) {
            while let Some(&(next_start, next)) = chars.peek() {
                if classify(next) != kind {
                    break;
                }
                end = next_start + next.len_utf8();
                chars.next();
            }
        }

        tokens.push(Token {
            kind,
            text: text.get(start..end).unwrap_or_default(),
            span: start..end,
        });
    }

    tokens
}

/// Forward-only cursor over a token slice used by the recursive-descent
/// scanners.
pub(crate) struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    index: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub(crate) const fn new(tokens: &'t [Token<'a>], index: usize) -> Self {
        Self { tokens, index }
    }

    pub(crate) const fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.index)
    }

    /// Consumes the next token when it satisfies `predicate`.
    pub(crate) fn next_if(
        &mut self,
        predicate: impl FnOnce(&Token<'a>) -> bool,
    ) -> Option<&'t Token<'a>> {
        let token = self.peek().filter(|token| predicate(token))?;
        self.index = self.index.saturating_add(1);
        Some(token)
    }

    /// Moves the cursor back to a previously observed index.
    pub(crate) fn rewind(&mut self, index: usize) {
        self.index = index;
    }

    /// Consumes a horizontal space run, if present.
    pub(crate) fn skip_space(&mut self) {
        self.next_if(|token| token.kind() == TokenKind::Space);
    }

    /// Returns the tokens consumed since `start`.
    pub(crate) fn consumed_since(&self, start: usize) -> &'t [Token<'a>] {
        self.tokens.get(start..self.index).unwrap_or_default()
    }
}
