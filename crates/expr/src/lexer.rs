use std::fmt;

use crate::{Error, Func};

/// A lexical token of a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    X,
    Func(Func),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::X => f.write_str("variable x"),
            Token::Func(func) => write!(f, "function {func}"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Caret => f.write_str("'^'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

/// A token with its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) position: usize,
}

/// Splits a formula into tokens.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, Error> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let token = if ch.is_ascii_digit() || ch == '.' {
            let end = scan(&mut chars, |c| c.is_ascii_digit() || c == '.');
            let literal = &source[position..end];
            let value = literal.parse().map_err(|_| Error::InvalidNumber {
                literal: literal.to_owned(),
                position,
            })?;
            Token::Number(value)
        } else if ch.is_ascii_alphabetic() {
            let end = scan(&mut chars, |c| c.is_ascii_alphabetic());
            let name = &source[position..end];
            match name {
                "x" => Token::X,
                _ => Token::Func(Func::from_name(name).ok_or_else(|| {
                    Error::UnknownIdentifier {
                        name: name.to_owned(),
                        position,
                    }
                })?),
            }
        } else {
            chars.next();
            match ch {
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '^' => Token::Caret,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                found => return Err(Error::Disallowed { found, position }),
            }
        };

        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

/// Consumes characters while `accept` holds and returns the end offset.
fn scan<I>(chars: &mut std::iter::Peekable<I>, accept: impl Fn(char) -> bool) -> usize
where
    I: Iterator<Item = (usize, char)>,
{
    let mut end = 0;
    while let Some(&(offset, c)) = chars.peek() {
        if !accept(c) {
            return offset;
        }
        end = offset + c.len_utf8();
        chars.next();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("valid tokens")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_literals() {
        assert_eq!(
            kinds("2.5*x^2 - .5"),
            vec![
                Token::Number(2.5),
                Token::Star,
                Token::X,
                Token::Caret,
                Token::Number(2.0),
                Token::Minus,
                Token::Number(0.5),
            ]
        );
    }

    #[test]
    fn tokenizes_function_calls() {
        assert_eq!(
            kinds("pow(x,3.)"),
            vec![
                Token::Func(Func::Pow),
                Token::LParen,
                Token::X,
                Token::Comma,
                Token::Number(3.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn records_byte_offsets() {
        let tokens = tokenize("  x + 10").expect("valid tokens");
        let offsets: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(offsets, vec![2, 4, 6]);
    }

    #[test]
    fn rejects_bad_numbers_and_names() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(Error::InvalidNumber { position: 0, .. })
        ));
        assert!(matches!(
            tokenize("x + ."),
            Err(Error::InvalidNumber { position: 4, .. })
        ));
        assert!(matches!(
            tokenize("xx"),
            Err(Error::UnknownIdentifier { .. })
        ));
    }
}
