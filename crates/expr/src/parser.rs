mod lexer;


use crate::{BinaryOp, Constant, Expr, Func, ParseError};

use lexer::{Spanned, Token, tokenize};

/// Deepest expression tree the parser will build.
///
/// Each nested group, prefix sign, exponent, and chained operator counts as
/// one level, which keeps the recursive walks over the tree off the end of
/// the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses source text into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first problem in the text.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expression()?;

    match parser.tokens.get(parser.pos) {
        None => Ok(expr),
        Some(extra) => Err(ParseError::UnexpectedToken {
            expected: "an operator or the end of the expression",
            position: extra.position,
        }),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn previous_is_number(&self) -> bool {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|s| matches!(s.token, Token::Number(_)))
    }

    /// Position of the next token, or of the last one at the end.
    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(0, |s| s.position)
    }

    /// Enters one more level of nesting, opened at `position`.
    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { position });
        }
        Ok(())
    }

    fn expect(&mut self, token: &Token, expected: &'static str) -> Result<(), ParseError> {
        match self.next() {
            Some(s) if s.token == *token => Ok(()),
            Some(s) => Err(ParseError::UnexpectedToken {
                expected,
                position: s.position,
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            // Each link of a chain deepens the left-leaning tree.
            self.descend(self.position())?;
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    BinaryOp::Mul
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    BinaryOp::Div
                }
                // Implicit multiplication: `2x`, `3(x+1)`, `2sin(x)`.
                Some(Token::Ident(_) | Token::LParen) if self.previous_is_number() => BinaryOp::Mul,
                _ => break,
            };
            self.descend(self.position())?;
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let negate = match self.peek() {
            Some(Token::Minus) => true,
            Some(Token::Plus) => false,
            _ => return self.power(),
        };
        self.descend(self.position())?;
        self.pos += 1;
        let operand = self.unary()?;
        self.depth -= 1;
        Ok(if negate { Expr::neg(operand) } else { operand })
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Caret) {
            self.descend(self.position())?;
            self.pos += 1;
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        const EXPECTED: &str = "a number, name, or '('";

        let Some(Spanned { token, position }) = self.next() else {
            return Err(ParseError::UnexpectedEnd { expected: EXPECTED });
        };

        match token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Ident(name) if self.peek() == Some(&Token::LParen) => self.call(name, position),
            Token::Ident(name) => Ok(match Constant::from_name(&name) {
                Some(constant) => Expr::Constant(constant),
                None => Expr::Variable(name),
            }),
            Token::LParen => {
                self.descend(position)?;
                let inner = self.expression()?;
                self.expect(&Token::RParen, "')'")?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: EXPECTED,
                position,
            }),
        }
    }

    fn call(&mut self, name: String, position: usize) -> Result<Expr, ParseError> {
        let func = Func::from_name(&name).ok_or(ParseError::UnknownFunction { name, position })?;

        self.descend(self.position())?;
        self.expect(&Token::LParen, "'('")?;
        let mut args = vec![self.expression()?];
        while self.peek() == Some(&Token::Comma) {
            self.pos += 1;
            args.push(self.expression()?);
        }
        self.expect(&Token::RParen, "')'")?;
        self.depth -= 1;

        let found = args.len();
        let mut args = args.into_iter();
        match (func, args.next(), args.next(), args.next()) {
            (_, Some(arg), None, None) => Ok(Expr::call(func, arg)),
            (Func::Log, Some(arg), Some(base), None) => Ok(Expr::binary(
                BinaryOp::Div,
                Expr::call(Func::Ln, arg),
                Expr::call(Func::Ln, base),
            )),
            _ => Err(ParseError::Arity {
                name: func.name(),
                found,
            }),
        }
    }
}
