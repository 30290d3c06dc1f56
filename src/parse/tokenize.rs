use super::span::Span;
use super::token::{Quote, Token, TokenKind};
use super::types::Operator;

/// Characters that end an unquoted word because they start an operator.
fn is_operator_char(c: char) -> bool {
    matches!(c, '&' | '|' | ';')
}

/// Split a line into tokens, respecting single/double quotes and
/// backslash escapes.
///
/// Never fails: an unclosed quote yields a word with `terminated == false`
/// and a stray `&` or `|` yields a [`TokenKind::PartialAction`]. A `#` at
/// the start of a word ends the scan.
pub fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        let c = chars[i].1;

        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '#' {
            break;
        }

        if let Some((kind, width)) = read_operator(&chars[i..]) {
            let span = Span::new(chars[i].0, byte_offset(line, &chars, i + width));
            let raw = span.slice(line).to_string();
            tokens.push(Token {
                kind,
                content: raw.clone(),
                raw_content: raw,
                quote: Quote::None,
                terminated: true,
                span,
            });
            i += width;
            continue;
        }

        let (token, next) = read_word(line, &chars, i);
        tokens.push(token);
        i = next;
    }

    tokens
}

fn byte_offset(line: &str, chars: &[(usize, char)], index: usize) -> usize {
    chars.get(index).map_or(line.len(), |&(offset, _)| offset)
}

/// Two-char operators first, then `;`, then the partial spellings.
fn read_operator(rest: &[(usize, char)]) -> Option<(TokenKind, usize)> {
    let first = rest.first()?.1;
    let second = rest.get(1).map(|&(_, c)| c);
    match (first, second) {
        ('&', Some('&')) => Some((TokenKind::Action(Operator::And), 2)),
        ('|', Some('|')) => Some((TokenKind::Action(Operator::Or), 2)),
        (';', _) => Some((TokenKind::Action(Operator::Sequence), 1)),
        ('&' | '|', _) => Some((TokenKind::PartialAction, 1)),
        _ => None,
    }
}

/// Read one word starting at `start`; returns the token and the index of
/// the first character after it.
fn read_word(line: &str, chars: &[(usize, char)], start: usize) -> (Token, usize) {
    let len = chars.len();
    let mut content = String::new();
    let mut quote = Quote::None;
    let mut i = start;
    let (mut sq, mut dq, mut esc) = (false, false, false);

    while i < len {
        let c = chars[i].1;

        if esc {
            content.push(c);
            esc = false;
            i += 1;
            continue;
        }
        // Single quotes are literal up to the next single quote
        if sq {
            if c == '\'' {
                sq = false;
            } else {
                content.push(c);
            }
            i += 1;
            continue;
        }
        if dq {
            match c {
                '"' => dq = false,
                '\\' => match chars.get(i + 1).map(|&(_, n)| n) {
                    Some(n) if n == '\\' || n == '"' || n.is_whitespace() => {
                        content.push(n);
                        i += 1;
                    }
                    _ => content.push('\\'),
                },
                _ => content.push(c),
            }
            i += 1;
            continue;
        }

        match c {
            '\\' if i + 1 < len => esc = true,
            '\'' => {
                sq = true;
                if quote == Quote::None {
                    quote = Quote::Single;
                }
            }
            '"' => {
                dq = true;
                if quote == Quote::None {
                    quote = Quote::Double;
                }
            }
            c if c.is_whitespace() || is_operator_char(c) => break,
            _ => content.push(c),
        }
        i += 1;
    }

    let span = Span::new(chars[start].0, byte_offset(line, chars, i));
    let token = Token {
        kind: TokenKind::Word,
        content,
        raw_content: span.slice(line).to_string(),
        quote,
        terminated: !(sq || dq),
        span,
    };
    (token, i)
}
