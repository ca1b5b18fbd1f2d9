//! Lexical extraction of method signatures.
//!
//! A signature is the `func` keyword, a name, and a parenthesised parameter
//! list, optionally followed by a return arrow and type. The parameter list is
//! matched greedily over a restricted token set, so the scan stops at the
//! opening brace of the body. Only the header is removed; the body and its
//! braces stay behind in the text.

use std::ops::Range;

use tracing::debug;

use crate::buffer::SourceBuffer;
use crate::error::RefactorError;
use crate::lexer::{Cursor, Token, TokenKind, tokenize};

const EXTRACT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::signature");

/// A signature removed from the working text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    text: String,
    span: Range<usize>,
}

impl Signature {
    /// The signature text, e.g. `func bar() -> Int `.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range the signature occupied in the working text when it was
    /// removed.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Repeatedly removes the leftmost signature from `buffer` until none is left.
///
/// Signatures are returned in discovery order. Each search runs on the text
/// left by the previous removal.
///
/// # Errors
///
/// Returns an error if a located span cannot be removed from the buffer.
pub fn extract_signatures(buffer: &mut SourceBuffer) -> Result<Vec<Signature>, RefactorError> {
    let mut signatures = Vec::new();

    loop {
        let text = buffer.text();
        let Some(span) = find_signature(&text) else {
            break;
        };
        let removed = buffer.remove(span.clone())?;
        debug!(
            target: EXTRACT_TARGET,
            signature = %removed,
            start = span.start,
            "extracted signature"
        );
        signatures.push(Signature {
            text: removed,
            span,
        });
    }

    Ok(signatures)
}

/// Returns the byte range of the leftmost signature in `text`.
pub(crate) fn find_signature(text: &str) -> Option<Range<usize>> {
    let tokens = tokenize(text);
    (0..tokens.len()).find_map(|index| match_signature(&tokens, index))
}

fn match_signature(tokens: &[Token<'_>], start: usize) -> Option<Range<usize>> {
    let mut cursor = Cursor::new(tokens, start);
    let keyword = cursor.next_if(|token| token.is_word("func"))?;
    cursor.next_if(|token| token.kind() == TokenKind::Space)?;
    cursor.next_if(|token| token.kind() == TokenKind::Word)?;
    cursor.skip_space();
    let open = cursor.next_if(|token| token.is_punct('('))?;

    let run_start = cursor.index();
    while cursor.next_if(is_parameter_token).is_some() {}
    let run = cursor.consumed_since(run_start);
    if run.is_empty() {
        return None;
    }

    // Trailing blank lines are not part of the header; spaces directly after
    // the last token on the same line are.
    let (mut end, after_content) = match run.iter().rposition(|token| !token.is_blank()) {
        Some(last) => (run.get(last)?.end(), last.saturating_add(1)),
        None => (open.end(), 0),
    };
    if let Some(space) = run
        .get(after_content)
        .filter(|token| token.kind() == TokenKind::Space)
    {
        end = space.end();
    }

    Some(keyword.start()..end)
}

fn is_parameter_token(token: &Token<'_>) -> bool {
    matches!(
        token.kind(),
        TokenKind::Word
            | TokenKind::Space
            | TokenKind::Newline
            | TokenKind::Punct(':' | ',' | '(' | ')' | '-' | '>')
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{extract_signatures, find_signature};
    use crate::SourceBuffer;

    fn first_match(text: &str) -> Option<&str> {
        find_signature(text).and_then(|span| text.get(span))
    }

    #[rstest]
    #[case("func bar() -> Int {", "func bar() -> Int ")]
    #[case("func bar() {", "func bar() ")]
    #[case("func go(a: Int, b: Int){", "func go(a: Int, b: Int)")]
    #[case("func  spaced (x: Int) {", "func  spaced (x: Int) ")]
    #[case("func wrap(f: (Int) -> Int) -> Int {", "func wrap(f: (Int) -> Int) -> Int ")]
    #[case("func tail()\n\n}", "func tail()")]
    fn matches_signature_headers(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(first_match(text), Some(expected));
    }

    #[rstest]
    #[case("function go() {}")]
    #[case("myfunc go() {}")]
    #[case("func go {}")]
    #[case("func go({}")]
    #[case("func () {}")]
    fn rejects_non_signatures(#[case] text: &str) {
        assert_eq!(first_match(text), None);
    }

    #[test]
    fn matches_inside_comments() {
        assert_eq!(first_match("// func note() {"), Some("func note() "));
    }

    #[test]
    fn multi_line_parameter_lists_are_captured() {
        let text = "func go(a: Int,\n        b: Int) -> Int {";
        assert_eq!(
            first_match(text),
            Some("func go(a: Int,\n        b: Int) -> Int ")
        );
    }

    #[test]
    fn extraction_preserves_discovery_order_and_bodies() {
        let mut buffer = SourceBuffer::new(
            "class A {\n    func one() {\n    }\n    func two(x: Int) -> Int {\n        x\n    }\n}",
        );
        let signatures = extract_signatures(&mut buffer).expect("extraction");
        let texts: Vec<&str> = signatures.iter().map(|sig| sig.text()).collect();

        assert_eq!(texts, vec!["func one() ", "func two(x: Int) -> Int "]);
        assert_eq!(
            buffer.text(),
            "class A {\n    {\n    }\n    {\n        x\n    }\n}"
        );
    }

    #[test]
    fn spans_are_relative_to_the_text_at_removal() {
        let mut buffer = SourceBuffer::new("func a() {}\nfunc b() {}");
        let signatures = extract_signatures(&mut buffer).expect("extraction");
        let spans: Vec<_> = signatures.iter().map(|sig| sig.span()).collect();

        assert_eq!(spans, vec![0..9, 3..12]);
    }

    #[test]
    fn text_without_signatures_is_untouched() {
        let source = "struct S {\n    let x = 1\n}\n";
        let mut buffer = SourceBuffer::new(source);
        let signatures = extract_signatures(&mut buffer).expect("extraction");

        assert!(signatures.is_empty());
        assert_eq!(buffer.text(), source);
    }
}
