pub mod error;
pub mod parser;
pub mod span;
pub mod token;
pub mod tokenize;
pub mod types;
pub mod zipper;

pub use error::{ParseError, SyntaxError};
pub use parser::parse;
pub use span::{context_snippet, Span};
pub use token::{Quote, Token, TokenKind};
pub use tokenize::tokenize;
pub use types::{Operator, Statement};
pub use zipper::{Cursor, Zipper};
