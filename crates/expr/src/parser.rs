//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'x' | func '(' expr (',' expr)* ')' | '(' expr ')'
//! ```
//!
//! Every `unary` and every chained binary operator counts one level of
//! nesting; input deeper than [`MAX_DEPTH`] is rejected with
//! [`Error::TooDeep`], which bounds the height of every tree built here.

use crate::{
    BinaryOp, Error, Expr,
    lexer::{Spanned, Token},
};

/// Maximum nesting depth accepted by the parser.
pub const MAX_DEPTH: usize = 256;

/// Parses a complete token stream into an expression tree.
pub(crate) fn parse(tokens: &[Spanned]) -> Result<Expr, Error> {
    if tokens.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    match parser.peek() {
        Some(extra) => Err(unexpected(extra)),
        None => Ok(expr),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Spanned, Error> {
        let spanned = *self.peek().ok_or(Error::UnexpectedEnd)?;
        self.pos += 1;
        Ok(spanned)
    }

    /// Consumes the next token if it matches `token`.
    fn eat(&mut self, token: Token) -> bool {
        if self.peek().is_some_and(|s| s.token == token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> Result<(), Error> {
        let spanned = self.next()?;
        if spanned.token == token {
            Ok(())
        } else {
            Err(unexpected(&spanned))
        }
    }

    /// Enters one level of nesting.
    fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let position = self
                .peek()
                .or_else(|| self.tokens.last())
                .map_or(0, |s| s.position);
            return Err(Error::TooDeep { position });
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(Token::Plus) {
                BinaryOp::Add
            } else if self.eat(Token::Minus) {
                BinaryOp::Sub
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            self.descend()?;
            lhs = Expr::binary(op, lhs, self.term()?);
        }
    }

    fn term(&mut self) -> Result<Expr, Error> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(Token::Star) {
                BinaryOp::Mul
            } else if self.eat(Token::Slash) {
                BinaryOp::Div
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            self.descend()?;
            lhs = Expr::binary(op, lhs, self.unary()?);
        }
    }

    fn unary(&mut self) -> Result<Expr, Error> {
        self.descend()?;
        let expr = if self.eat(Token::Minus) {
            Expr::Neg(Box::new(self.unary()?))
        } else if self.eat(Token::Plus) {
            self.unary()?
        } else {
            self.power()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, Error> {
        let base = self.primary()?;
        if self.eat(Token::Caret) {
            Ok(Expr::binary(BinaryOp::Pow, base, self.unary()?))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, Error> {
        let spanned = self.next()?;
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::X => Ok(Expr::X),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Func(func) => {
                self.expect(Token::LParen)?;
                let mut args = vec![self.expr()?];
                while self.eat(Token::Comma) {
                    args.push(self.expr()?);
                }
                self.expect(Token::RParen)?;

                func.check_arity(args.len())
                    .map_err(|expected| Error::Arity {
                        func,
                        expected,
                        found: args.len(),
                    })?;
                Ok(Expr::Call { func, args })
            }
            _ => Err(unexpected(&spanned)),
        }
    }
}

fn unexpected(spanned: &Spanned) -> Error {
    Error::UnexpectedToken {
        found: spanned.token.to_string(),
        position: spanned.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Func, lexer::tokenize};

    fn tree(source: &str) -> Result<Expr, Error> {
        parse(&tokenize(source)?)
    }

    fn nested_parens(levels: usize) -> String {
        format!("{}x{}", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_eq!(
            tree("-x^2"),
            Ok(Expr::Neg(Box::new(Expr::binary(
                BinaryOp::Pow,
                Expr::X,
                Expr::Number(2.0)
            ))))
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            tree("x - 1 - 2"),
            Ok(Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Sub, Expr::X, Expr::Number(1.0)),
                Expr::Number(2.0)
            ))
        );
    }

    #[test]
    fn calls_collect_arguments() {
        assert_eq!(
            tree("max(x, 1, 2)"),
            Ok(Expr::Call {
                func: Func::Max,
                args: vec![Expr::X, Expr::Number(1.0), Expr::Number(2.0)],
            })
        );
    }

    #[test]
    fn reports_position_of_stray_token() {
        assert_eq!(
            tree("x + )"),
            Err(Error::UnexpectedToken {
                found: "')'".to_owned(),
                position: 4
            })
        );
        assert!(matches!(
            tree("sin(x))"),
            Err(Error::UnexpectedToken { position: 6, .. })
        ));
    }

    #[test]
    fn empty_argument_lists_are_rejected() {
        assert!(matches!(
            tree("max()"),
            Err(Error::UnexpectedToken { .. })
        ));
        assert!(matches!(
            tree("sin(x, x)"),
            Err(Error::Arity { func: Func::Sin, found: 2, .. })
        ));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        assert!(matches!(
            tree(&nested_parens(100_000)),
            Err(Error::TooDeep { .. })
        ));

        let negations = format!("{}x", "-".repeat(100_000));
        assert!(matches!(tree(&negations), Err(Error::TooDeep { .. })));

        let powers = format!("x{}", "^x".repeat(100_000));
        assert!(matches!(tree(&powers), Err(Error::TooDeep { .. })));
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let sum = format!("x{}", "+x".repeat(100_000));
        assert!(matches!(tree(&sum), Err(Error::TooDeep { .. })));

        let product = format!("x{}", "*x".repeat(100_000));
        assert!(matches!(tree(&product), Err(Error::TooDeep { .. })));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        assert_eq!(tree(&nested_parens(100)), Ok(Expr::X));

        // The innermost `x` sits one level below the last parenthesis.
        assert_eq!(tree(&nested_parens(MAX_DEPTH - 1)), Ok(Expr::X));
        assert!(matches!(
            tree(&nested_parens(MAX_DEPTH)),
            Err(Error::TooDeep { .. })
        ));

        let sum = format!("x{}", "+x".repeat(200));
        assert!(tree(&sum).is_ok());
        assert!(tree("sin(-(x + 1)) * (2 - x) ^ 2 / 3").is_ok());
    }

    #[test]
    fn too_deep_reports_a_position_inside_the_input() {
        let source = nested_parens(1_000);
        match tree(&source) {
            Err(Error::TooDeep { position }) => assert!(position < source.len()),
            other => panic!("expected TooDeep, got {other:?}"),
        }
    }
}
