//! Class header location, protocol naming and conformance rewriting.

use std::ops::Range;

use crate::lexer::{Cursor, Token, TokenKind, tokenize};

const ACCESS_MODIFIERS: [&str; 3] = ["public", "private", "internal"];

/// The header of the first class declared in a text.
///
/// The span runs from the first modifier (or the `class` keyword) through the
/// last identifier of the conformance list. Trailing whitespace and the
/// opening brace are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    span: Range<usize>,
    text: String,
    name: String,
    has_conformances: bool,
}

impl ClassDeclaration {
    /// Finds the first class header in `text`.
    #[must_use]
    pub fn locate(text: &str) -> Option<Self> {
        let tokens = tokenize(text);
        let (span, name, has_conformances) =
            (0..tokens.len()).find_map(|index| match_header(&tokens, index))?;
        Some(Self {
            text: text.get(span.clone())?.to_owned(),
            span,
            name,
            has_conformances,
        })
    }

    /// Byte range of the header in the text it was located in.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The header text, e.g. `final class Foo: Bar`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bare class identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the header lists a superclass or protocols.
    #[must_use]
    pub const fn has_conformances(&self) -> bool {
        self.has_conformances
    }

    /// Derives the protocol name by appending `suffix` to the class name.
    #[must_use]
    pub fn protocol_name(&self, suffix: &str) -> String {
        let identifier: String = self
            .name
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        format!("{identifier}{suffix}")
    }

    /// Returns the header with `protocol_name` added to its conformance list
    /// and an opening brace appended.
    #[must_use]
    pub fn conforming_to(&self, protocol_name: &str) -> String {
        let separator = if self.text.contains(':') { "," } else { ":" };
        format!("{}{separator} {protocol_name} {{", self.text)
    }
}

/// Locates the first class header in `text`.
#[must_use]
pub fn locate_class_declaration(text: &str) -> Option<ClassDeclaration> {
    ClassDeclaration::locate(text)
}

/// Derives `{ClassName}{suffix}` from the first class header in `text`.
///
/// Returns an empty string when `text` declares no class.
#[must_use]
pub fn derive_protocol_name(text: &str, suffix: &str) -> String {
    ClassDeclaration::locate(text)
        .map(|declaration| declaration.protocol_name(suffix))
        .unwrap_or_default()
}

/// Rewrites the first class header in `text` to conform to `protocol_name`.
///
/// Returns an empty string when `text` declares no class.
#[must_use]
pub fn rewrite_class_declaration(text: &str, protocol_name: &str) -> String {
    ClassDeclaration::locate(text)
        .map(|declaration| declaration.conforming_to(protocol_name))
        .unwrap_or_default()
}

fn match_header(tokens: &[Token<'_>], start: usize) -> Option<(Range<usize>, String, bool)> {
    let mut cursor = Cursor::new(tokens, start);
    let first = cursor.peek()?;
    skip_modifiers(&mut cursor)?;

    cursor.next_if(|token| token.is_word("class"))?;
    cursor.next_if(|token| token.kind() == TokenKind::Space)?;
    let name = cursor.next_if(|token| token.kind() == TokenKind::Word)?;

    let mut end = name.end();
    let mut has_conformances = false;
    cursor.skip_space();
    if cursor.next_if(|token| token.is_punct(':')).is_some() {
        cursor.skip_space();
        // A colon must introduce at least one type.
        let conformance = cursor.next_if(|token| token.kind() == TokenKind::Word)?;
        end = conformance.end();
        has_conformances = true;
        while let Some(next) = next_list_entry(&mut cursor) {
            end = next.end();
        }
    }

    Some((first.start()..end, name.text().to_owned(), has_conformances))
}

/// Consumes `final` and one access modifier, each at most once and in either
/// order. Fails if a modifier is not followed by a space.
fn skip_modifiers(cursor: &mut Cursor<'_, '_>) -> Option<()> {
    let mut seen_final = false;
    let mut seen_access = false;

    while let Some(token) = cursor.peek() {
        let is_final = !seen_final && token.is_word("final");
        let is_access = !seen_access
            && token.kind() == TokenKind::Word
            && ACCESS_MODIFIERS.contains(&token.text());
        if !is_final && !is_access {
            break;
        }
        seen_final |= is_final;
        seen_access |= is_access;
        cursor.next_if(|_| true)?;
        cursor.next_if(|token| token.kind() == TokenKind::Space)?;
    }

    Some(())
}

fn next_list_entry<'t, 'a>(cursor: &mut Cursor<'t, 'a>) -> Option<&'t Token<'a>> {
    let checkpoint = cursor.index();
    cursor.skip_space();
    if cursor.next_if(|token| token.is_punct(',')).is_some() {
        cursor.skip_space();
        if let Some(entry) = cursor.next_if(|token| token.kind() == TokenKind::Word) {
            return Some(entry);
        }
    }
    cursor.rewind(checkpoint);
    None
}
