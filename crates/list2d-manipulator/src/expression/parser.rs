//! Recursive-descent parser for replacement formulas.
//!
//! Precedence, loosest first: `+ -`, `* / // %`, unary `- +`, `**`.
//! `**` is right-associative and binds tighter than a unary minus on its
//! left (`-2 ** 2 == -4`).

use list2d_core::{ExpressionError, Value};

use super::ast::{BinaryOp, Expr, Function, UnaryOp};
use super::lexer::{Spanned, Token};

/// Deepest syntax tree accepted. Parentheses, calls, unary operators and
/// every folded binary operator each count one level.
const MAX_DEPTH: usize = 64;

pub fn parse(tokens: &[Spanned], src_len: usize) -> Result<Expr, ExpressionError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        src_len,
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(parser.error_at(tok.offset, "unexpected trailing input")),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    src_len: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().is_some_and(|t| &t.token == expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error_at(&self, offset: usize, message: &str) -> ExpressionError {
        ExpressionError::Syntax {
            offset,
            message: message.to_string(),
        }
    }

    fn current_offset(&self) -> usize {
        self.peek().map_or(self.src_len, |t| t.offset)
    }

    /// Take one nesting level, failing once the tree would exceed `MAX_DEPTH`.
    fn descend(&mut self) -> Result<(), ExpressionError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error_at(self.current_offset(), "expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        let depth = self.depth;
        let result = self.sum();
        self.depth = depth;
        result
    }

    // A left-associative chain grows the tree by one level per operator, so
    // each fold keeps its level until the whole chain is parsed.
    fn sum(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().map(|t| &t.token) {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.descend()?;
            self.pos += 1;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let depth = self.depth;
        let result = self.product();
        self.depth = depth;
        result
    }

    fn product(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().map(|t| &t.token) {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::DoubleSlash) => BinaryOp::FloorDiv,
                Some(Token::Percent) => BinaryOp::Mod,
                _ => return Ok(lhs),
            };
            self.descend()?;
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        self.descend()?;
        let result = self.unary_inner();
        self.depth -= 1;
        result
    }

    fn unary_inner(&mut self) -> Result<Expr, ExpressionError> {
        let op = match self.peek().map(|t| &t.token) {
            Some(Token::Minus) => UnaryOp::Neg,
            Some(Token::Plus) => UnaryOp::Pos,
            _ => return self.power(),
        };
        self.pos += 1;
        let operand = self.unary()?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.atom()?;
        if self.eat(&Token::DoubleStar) {
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ExpressionError> {
        let offset = self.current_offset();
        let Some(tok) = self.bump() else {
            return Err(self.error_at(offset, "unexpected end of expression"));
        };

        match &tok.token {
            Token::Int(i) => Ok(Expr::Literal(Value::Int(*i))),
            Token::Float(f) => Ok(Expr::Literal(Value::Float(*f))),
            Token::Str(s) => Ok(Expr::Literal(Value::Text(s.clone()))),
            Token::LParen => {
                let inner = self.expr()?;
                if !self.eat(&Token::RParen) {
                    return Err(self.error_at(self.current_offset(), "expected ')'"));
                }
                Ok(inner)
            }
            Token::Ident(name) => match name.as_str() {
                "True" => Ok(Expr::Literal(Value::Bool(true))),
                "False" => Ok(Expr::Literal(Value::Bool(false))),
                "None" => Ok(Expr::Literal(Value::Null)),
                _ => self.call(name, tok.offset),
            },
            _ => Err(self.error_at(tok.offset, "expected a value")),
        }
    }

    fn call(&mut self, name: &str, offset: usize) -> Result<Expr, ExpressionError> {
        if !self.eat(&Token::LParen) {
            return Err(self.error_at(offset, &format!("unknown name '{name}'")));
        }
        let function =
            Function::from_name(name).ok_or_else(|| ExpressionError::UnknownFunction(name.to_string()))?;

        let mut args = Vec::new();
        if !self.eat(&Token::RParen) {
            loop {
                args.push(self.expr()?);
                if self.eat(&Token::Comma) {
                    continue;
                }
                if self.eat(&Token::RParen) {
                    break;
                }
                return Err(self.error_at(self.current_offset(), "expected ',' or ')'"));
            }
        }

        if !function.accepts(args.len()) {
            return Err(ExpressionError::Arity {
                function: function.name(),
                expected: function.expected_args(),
                found: args.len(),
            });
        }

        Ok(Expr::Call { function, args })
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
