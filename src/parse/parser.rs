use super::error::{ParseError, SyntaxError};
use super::token::{Token, TokenKind};
use super::types::Statement;

/// Build statements from a token sequence.
///
/// A statement is `command argument*`, terminated by an operator or the
/// end of input. The first defect found scanning left to right fails the
/// whole line; no partial result is returned.
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();
    let mut current: Option<Statement> = None;

    for token in tokens {
        match token.kind {
            TokenKind::Word if !token.terminated => {
                return Err(SyntaxError::UnterminatedString {
                    quote: token.quote,
                    span: token.span,
                }
                .into());
            }
            TokenKind::Word => match current.as_mut() {
                Some(statement) => statement.arguments.push(token.clone()),
                None => {
                    current = Some(Statement {
                        command: token.clone(),
                        arguments: Vec::new(),
                        next_operator: None,
                    });
                }
            },
            TokenKind::Action(operator) => {
                let Some(mut statement) = current.take() else {
                    return Err(ParseError::MissingCommand {
                        operator,
                        span: token.span,
                    });
                };
                statement.next_operator = Some(operator);
                statements.push(statement);
            }
            TokenKind::PartialAction => {
                return Err(ParseError::UnrecognizedOperator {
                    raw: token.raw_content.clone(),
                    span: token.span,
                });
            }
        }
    }

    match current {
        Some(statement) => statements.push(statement),
        None => {
            if let Some(last) = tokens.last()
                && let TokenKind::Action(operator) = last.kind
            {
                return Err(ParseError::DanglingOperator {
                    operator,
                    span: last.span,
                });
            }
        }
    }

    Ok(statements)
}
