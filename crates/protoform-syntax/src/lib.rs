//! Lexical protocol extraction for Swift-style class declarations.
//!
//! Given the text of one source file, this crate synthesizes a protocol
//! holding the signatures of the first class's methods, inserts it above the
//! class, and rewrites the class header to conform to it:
//!
//! - **Signature extraction** via [`extract_signatures`], which strips method
//!   headers from a [`SourceBuffer`] and leaves their bodies in place
//! - **Class location** via [`ClassDeclaration::locate`]
//! - **Naming and rewriting** via [`derive_protocol_name`] and
//!   [`rewrite_class_declaration`]
//! - **Assembly** via [`Refactorer::apply`], which runs the whole pipeline
//!
//! Matching is purely lexical. The tokenizer does not know about comments or
//! string literals, generics or attributes; declarations inside comments are
//! matched like any other text.
//!
//! # Example
//!
//! ```
//! use protoform_syntax::{RefactorOutcome, extract_protocol};
//!
//! let source = "class Foo {\n    func bar() -> Int {\n        return 1\n    }\n}";
//! let RefactorOutcome::Applied(refactoring) = extract_protocol(source)? else {
//!     panic!("expected a refactoring");
//! };
//!
//! assert_eq!(refactoring.protocol_name(), "FooProtocol");
//! assert!(refactoring.text().starts_with("protocol FooProtocol: AnyObject {\n"));
//! # Ok::<(), protoform_syntax::RefactorError>(())
//! ```

mod buffer;
mod declaration;
mod error;
mod lexer;
mod options;
mod position;
mod refactor;
mod signature;

pub use buffer::SourceBuffer;
pub use declaration::{
    ClassDeclaration, derive_protocol_name, locate_class_declaration, rewrite_class_declaration,
};
pub use error::RefactorError;
pub use options::ProtocolOptions;
pub use position::{LineColumn, Selection};
pub use refactor::{
    EditRequest, NoOpReason, RefactorOutcome, Refactorer, Refactoring, extract_protocol,
};
pub use signature::{Signature, extract_signatures};

#[cfg(test)]
mod tests;
